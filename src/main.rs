use clap::Parser;
use scrub_sizer::config::cli::{ChartArgs, Command, EstimateArgs, UserCommand};
use scrub_sizer::config::build_feedback_sink;
use scrub_sizer::config::toml_config::LogFormat;
use scrub_sizer::core::chart::size_chart_disclaimer;
use scrub_sizer::utils::error::ErrorSeverity;
use scrub_sizer::utils::{logger, validation::Validate};
use scrub_sizer::{
    render_size_chart, AppConfig, ClientInfo, CliConfig, FeedbackOutcome, LocalUserStore,
    Measurement, NewUser, SizeAdvisor, SizerError, UserStore,
};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（未指定時使用預設值）
    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    };

    // 初始化日誌
    match config.log_format() {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match cli.command {
        Command::Estimate(args) => run_estimate(&config, args).await,
        Command::Chart(args) => {
            run_chart(&config, args);
            Ok(())
        }
        Command::User(command) => run_user(&config, command).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run_estimate(config: &AppConfig, args: EstimateArgs) -> Result<(), SizerError> {
    let gender = args.gender.unwrap_or_else(|| config.default_gender());
    let defaults = config.default_measurement();
    let measurement = Measurement::clamped(
        args.height.unwrap_or(defaults.height_cm),
        args.weight.unwrap_or(defaults.weight_kg),
    );
    let language = args.lang.unwrap_or_else(|| config.language());

    let advisor = SizeAdvisor::new(build_feedback_sink(config)?, language);
    let recommendation = advisor.recommend(gender, measurement);
    let estimate = &recommendation.estimate;

    println!(
        "Recommended size: {} ({})",
        estimate.label, recommendation.description
    );
    println!(
        "Based on {} cm / {} kg, estimated chest {:.1} cm",
        measurement.height_cm, measurement.weight_kg, estimate.chest_cm
    );

    if args.chart {
        println!();
        print!("{}", render_size_chart(gender, Some(estimate.label)));
    }
    println!();
    println!("{}", size_chart_disclaimer(language));

    if let Some(actual) = args.actual {
        let record = advisor.feedback_record(
            &recommendation,
            actual,
            ClientInfo {
                ip: args.client_ip,
                user_agent: args.user_agent,
            },
        );
        let outcome = advisor
            .submit_feedback_detached(record)
            .await
            .unwrap_or_else(|e| FeedbackOutcome::Failed {
                message: e.to_string(),
            });
        match outcome {
            FeedbackOutcome::Submitted => println!("✅ Thanks, your feedback was sent"),
            FeedbackOutcome::Skipped => println!("ℹ️ Feedback collection is not configured"),
            FeedbackOutcome::Failed { message } => eprintln!("⚠️ {}", message),
        }
    }

    Ok(())
}

fn run_chart(config: &AppConfig, args: ChartArgs) {
    let gender = args.gender.unwrap_or_else(|| config.default_gender());
    if let Some(label) = args.highlight {
        if !gender.has_size(label) {
            tracing::warn!("Size {} is not available for {}", label, gender);
        }
    }
    println!("Size chart ({}), cm", gender);
    print!("{}", render_size_chart(gender, args.highlight));
    println!();
    println!("{}", size_chart_disclaimer(config.language()));
}

async fn run_user(config: &AppConfig, command: UserCommand) -> Result<(), SizerError> {
    let store = LocalUserStore::open(config.users_path()).await?;

    match command {
        UserCommand::Create { username, password } => {
            let user = store.create_user(NewUser { username, password }).await?;
            println!("✅ Created user #{} ({})", user.id, user.username);
        }
        UserCommand::Get { id, username } => {
            let user = match (id, username) {
                (Some(id), _) => store.get_user(id).await?,
                (None, Some(username)) => store.get_user_by_username(&username).await?,
                (None, None) => None,
            };
            match user {
                Some(user) => println!("#{} {}", user.id, user.username),
                None => println!("No matching user"),
            }
        }
    }

    Ok(())
}
