use clap::Parser;
use field_watch::domain::model::{
    CONFIRM_PASSWORD_FEEDBACK_ID, EMAIL_FEEDBACK_ID, USERNAME_FEEDBACK_ID,
};
use field_watch::page::lock_page;
use field_watch::utils::{logger, validation::Validate};
use field_watch::{CliConfig, FieldEvent, FormValidator, HttpAvailabilityChecker, Page};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str =
    "commands: input <field> <value> | blur <field> | check <field> on|off | wait <ms> | show | submit | quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting field-watch");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let page = Page::registration_form(&cli.csrf_token).into_shared();
    let checker = Arc::new(HttpAvailabilityChecker::from_config(&config));
    let validator = FormValidator::attach(page, checker, &config)?;

    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        let mut parts = line.splitn(3, ' ');
        let command = parts.next().unwrap_or_default();

        match command {
            "" => {}
            "input" => match parts.next() {
                Some(field) => {
                    let value = parts.next().unwrap_or_default();
                    if let Err(e) = validator.handle(FieldEvent::input(field, value)) {
                        tracing::error!("❌ {}", e);
                    }
                }
                None => eprintln!("usage: input <field> <value>"),
            },
            "blur" => match parts.next() {
                Some(field) => {
                    if let Err(e) = validator.handle(FieldEvent::blur(field)) {
                        tracing::error!("❌ {}", e);
                    }
                }
                None => eprintln!("usage: blur <field>"),
            },
            "check" => match (parts.next(), parts.next()) {
                (Some(field), Some(state @ ("on" | "off"))) => {
                    if let Err(e) = validator.handle(FieldEvent::toggle(field, state == "on")) {
                        tracing::error!("❌ {}", e);
                    }
                }
                _ => eprintln!("usage: check <field> on|off"),
            },
            "wait" => match parts.next().map(str::parse::<u64>) {
                Some(Ok(ms)) => tokio::time::sleep(Duration::from_millis(ms)).await,
                _ => eprintln!("usage: wait <ms>"),
            },
            "show" => show_feedback(&validator)?,
            "submit" => {
                let issues = validator.submit()?;
                if issues.is_empty() {
                    println!("✅ Form is valid");
                }
                for issue in issues {
                    println!("❌ {}: {}", issue.field, issue.message);
                }
            }
            "quit" | "exit" => break,
            _ => eprintln!("{}", HELP),
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

fn show_feedback(validator: &FormValidator<HttpAvailabilityChecker>) -> field_watch::Result<()> {
    let page = lock_page(validator.page())?;
    for id in [USERNAME_FEEDBACK_ID, EMAIL_FEEDBACK_ID, CONFIRM_PASSWORD_FEEDBACK_ID] {
        match page.feedback_of(id) {
            Some((text, color)) => println!("{:<28} [{}] {}", id, color.unwrap_or("-"), text),
            None => println!("{:<28} -", id),
        }
    }
    Ok(())
}
