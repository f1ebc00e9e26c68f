use clap::Parser;
use folio::config::LogFormat;
use folio::utils::error::{ErrorSeverity, SiteError};
use folio::utils::logger;
use folio::{build_router, CliConfig, Site};

fn exit_code(e: &SiteError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(context: &str, e: SiteError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        context,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e).max(1));
}

/// Peek at the config only to pick a log format; full loading happens later
/// with logging in place.
fn log_format(path: &str) -> LogFormat {
    folio::SiteConfig::from_file(path)
        .map(|c| c.log_format())
        .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    match log_format(&args.config) {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("🚀 Starting folio v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let site = match Site::load(&args.config) {
        Ok(site) => site,
        Err(e) => fail("Failed to load site", e),
    };

    let listen = args
        .listen
        .clone()
        .unwrap_or_else(|| site.config.server.listen.clone());

    tracing::info!("✅ Configuration loaded and validated successfully");
    tracing::info!(
        "👤 Profile '{}': {} experience entries, {} title links",
        site.profile.name,
        site.profile.experience.len(),
        site.profile.title_links.len()
    );
    tracing::info!("🖼️  Public assets: {}", site.public_dir.display());
    if !site.contact.is_configured() {
        tracing::warn!("✉️  Contact form will answer with a configuration error");
    }

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - not starting the server");
        println!("✅ Site '{}' is valid; would listen on {}", site.config.site.name, listen);
        return Ok(());
    }

    let app = build_router(site.into_state());

    let listener = tokio::net::TcpListener::bind(listen.as_str()).await?;
    tracing::info!("🌐 Listening on http://{}", listen);
    println!("🌐 Listening on http://{}", listen);

    axum::serve(listener, app).await?;

    Ok(())
}
