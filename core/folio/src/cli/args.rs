use crate::domain::{FolioCommand, PageFormat};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

const BIN_NAME: &str = "folio";

/// CLI から受け取った生の設定（サブコマンドは名前のまま保持）
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: ログを stderr にも出す
    pub verbose: bool,
    /// -P / --profile: プロフィール JSON
    pub profile: Option<PathBuf>,
    /// -R / --rules: ルール表ファイル
    pub rules: Option<PathBuf>,
    /// サブコマンド名（render / ask / chat / rules）
    pub command_name: Option<String>,
    /// render --format
    pub format: Option<String>,
    /// render -o / --output
    pub out: Option<PathBuf>,
    /// ask のメッセージ語
    pub message_args: Vec<String>,
    /// ask --explain: 一致した話題を前置する
    pub explain: bool,
    /// chat --delay-ms
    pub delay_ms: Option<u64>,
    /// chat --suppress-on-close
    pub suppress_on_close: bool,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Also print log records to stderr")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("profile")
                .short('P')
                .long("profile")
                .value_name("file")
                .help("Profile JSON to use instead of profile.json / the built-in profile")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("rules")
                .short('R')
                .long("rules")
                .value_name("file")
                .help("Rule file to use instead of rules.txt / the default rules")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

/// サブコマンド（-h はグローバル引数で受けるので自動ヘルプは切る）
fn subcommand(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name).about(about).disable_help_flag(true)
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new(BIN_NAME)
            .about("Render a portfolio page and answer questions about it")
            .disable_help_subcommand(true)
            .subcommand(
                subcommand("render", "Render the portfolio page")
                    .arg(
                        clap::Arg::new("format")
                            .short('f')
                            .long("format")
                            .value_name("format")
                            .help("Output format")
                            .value_parser(["html", "text", "txt"])
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("output")
                            .short('o')
                            .long("output")
                            .value_name("file")
                            .help("Write to a file instead of stdout")
                            .value_parser(value_parser!(PathBuf))
                            .num_args(1),
                    ),
            )
            .subcommand(
                subcommand("ask", "Print the assistant's reply to one message")
                    .arg(
                        clap::Arg::new("explain")
                            .long("explain")
                            .help("Prefix the reply with the matched topic")
                            .action(ArgAction::SetTrue),
                    )
                    .arg(
                        clap::Arg::new("message")
                            .value_name("message")
                            .help("Message words")
                            .num_args(1..),
                    ),
            )
            .subcommand(
                subcommand("chat", "Chat with the assistant interactively")
                    .arg(
                        clap::Arg::new("delay-ms")
                            .long("delay-ms")
                            .value_name("ms")
                            .help("Reply delay in milliseconds (overrides settings.json)")
                            .value_parser(value_parser!(u64))
                            .num_args(1),
                    )
                    .arg(
                        clap::Arg::new("suppress-on-close")
                            .long("suppress-on-close")
                            .help("Drop pending replies when the chat is closed")
                            .action(ArgAction::SetTrue),
                    ),
            )
            .subcommand(subcommand(
                "rules",
                "List the active keyword rules in priority order",
            )),
    )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let mut config = Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        profile: matches.get_one::<PathBuf>("profile").cloned(),
        rules: matches.get_one::<PathBuf>("rules").cloned(),
        ..Default::default()
    };

    let Some((name, sub)) = matches.subcommand() else {
        return config;
    };
    config.command_name = Some(name.to_string());
    // グローバル引数はサブコマンド側の matches にも入る
    config.help |= sub.get_flag("help");
    config.verbose |= sub.get_flag("verbose");
    if let Some(p) = sub.get_one::<PathBuf>("profile") {
        config.profile = Some(p.clone());
    }
    if let Some(r) = sub.get_one::<PathBuf>("rules") {
        config.rules = Some(r.clone());
    }

    match name {
        "render" => {
            config.format = sub.get_one::<String>("format").cloned();
            config.out = sub.get_one::<PathBuf>("output").cloned();
        }
        "ask" => {
            config.explain = sub.get_flag("explain");
            config.message_args = sub
                .get_many::<String>("message")
                .map(|i| i.cloned().collect())
                .unwrap_or_default();
        }
        "chat" => {
            config.delay_ms = sub.get_one::<u64>("delay-ms").copied();
            config.suppress_on_close = sub.get_flag("suppress-on-close");
        }
        _ => {}
    }
    config
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_outcome(build_clap_command().try_get_matches())
}

/// 引数スライスから解析する（テスト用の入口）
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<ParseOutcome, Error> {
    parse_outcome(build_clap_command().try_get_matches_from(args))
}

fn parse_outcome(matches: Result<clap::ArgMatches, clap::Error>) -> Result<ParseOutcome, Error> {
    let matches = matches.map_err(|e| Error::invalid_argument(e.to_string()))?;
    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を FolioCommand に変換する
pub fn config_to_command(config: Config) -> Result<FolioCommand, Error> {
    if config.help {
        return Ok(FolioCommand::Help);
    }

    match config.command_name.as_deref() {
        Some("render") => {
            let format = match config.format.as_deref() {
                None => PageFormat::default(),
                Some(s) => PageFormat::parse(s).ok_or_else(|| {
                    Error::invalid_argument(format!("unknown format '{}'", s))
                })?,
            };
            Ok(FolioCommand::Render {
                format,
                out: config.out,
            })
        }
        Some("ask") => {
            let message = config.message_args.join(" ");
            if message.trim().is_empty() {
                return Err(Error::invalid_argument(
                    "No message provided. Usage: folio ask <message...>",
                ));
            }
            Ok(FolioCommand::Ask {
                message,
                explain: config.explain,
            })
        }
        Some("chat") => Ok(FolioCommand::Chat {
            delay_ms: config.delay_ms,
            suppress_on_close: config.suppress_on_close,
        }),
        Some("rules") => Ok(FolioCommand::Rules),
        Some(other) => Err(Error::invalid_argument(format!(
            "unknown command '{}'",
            other
        ))),
        None => Err(Error::invalid_argument(
            "No command provided. Try 'folio render' or 'folio chat'.",
        )),
    }
}
