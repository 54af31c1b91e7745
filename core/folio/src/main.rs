mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;
use adapter::StdioChatIo;
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::FolioCommand;
use ports::inbound::UseCaseRunner;
use usecase::app::{topic_name, ContentSources};
use wiring::{wire_folio, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }

    fn dispatch(&self, cmd: FolioCommand, sources: &ContentSources) -> Result<i32, Error> {
        match cmd {
            FolioCommand::Help => {
                print_help();
                Ok(0)
            }
            FolioCommand::Render { format, out } => {
                match out {
                    Some(path) => {
                        let bytes = self.app.folio.render_to_file(sources, format, &path)?;
                        eprintln!("wrote {} bytes to {}", bytes, path.display());
                    }
                    None => print!("{}", self.app.folio.render_page(sources, format)?),
                }
                Ok(0)
            }
            FolioCommand::Ask { message, explain } => {
                let reply = self.app.folio.ask(sources, &message)?;
                if explain {
                    println!("[{}]", topic_name(&reply));
                }
                println!("{}", reply.text);
                Ok(0)
            }
            FolioCommand::Chat {
                delay_ms,
                suppress_on_close,
            } => {
                let mut widget = self
                    .app
                    .folio
                    .chat_widget(sources, delay_ms, suppress_on_close)?;
                let mut io = StdioChatIo::stdio("assistant");
                let summary = self.app.chat_session().run(&mut widget, &mut io)?;
                Ok(if summary.interrupted { 130 } else { 0 })
            }
            FolioCommand::Rules => {
                for (i, rule) in self.app.folio.rules(sources)?.iter().enumerate() {
                    println!("{}. {}: {}", i + 1, rule.topic, rule.triggers.join(", "));
                }
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let sources = ContentSources {
            profile: config.profile.clone(),
            rules: config.rules.clone(),
        };
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        self.log(
            LogRecord::new(LogLevel::Info, "command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(cmd, &sources);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::new(LogLevel::Info, "command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::new(LogLevel::Error, e.to_string()).kind("error"));
        }
        result
    }
}

fn cmd_name_for_log(cmd: &FolioCommand) -> &'static str {
    match cmd {
        FolioCommand::Help => "help",
        FolioCommand::Render { .. } => "render",
        FolioCommand::Ask { .. } => "ask",
        FolioCommand::Chat { .. } => "chat",
        FolioCommand::Rules => "rules",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("folio: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_folio(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: folio [options] <render|ask|chat|rules> [args...]");
}

fn print_help() {
    println!("Usage: folio [options] <command> [args...]");
    println!();
    println!("Commands:");
    println!("  render [--format html|text] [-o FILE]   Render the portfolio page to stdout or FILE");
    println!("  ask [--explain] <message...>           Print the assistant's reply (no delay)");
    println!("  chat [--delay-ms N] [--suppress-on-close]");
    println!("                                         Chat interactively. Commands: /toggle /open /close /history /quit");
    println!("  rules                                  List the active keyword rules in priority order");
    println!();
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -v, --verbose             Also print log records to stderr");
    println!("  -P, --profile <file>      Profile JSON (default: $FOLIO_HOME/profile.json, else built-in)");
    println!("  -R, --rules <file>        Rule file (default: $FOLIO_HOME/rules.txt, else built-in rules)");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  FOLIO_HOME      Config directory (settings.json, profile.json, rules.txt); logs in $FOLIO_HOME/state/logs.");
    println!("                  If unset, $XDG_CONFIG_HOME/folio (e.g. ~/.config/folio) is used.");
    println!();
    println!("Examples:");
    println!("  folio render -o site/index.html");
    println!("  folio ask --explain how can I contact you");
    println!("  folio chat --delay-ms 300");
}
