mod chat_session_tests;
mod responder_tests;
