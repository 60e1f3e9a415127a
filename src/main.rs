use library_catalog::{
    adapters::{
        memory::{CheckableRepository, LibraryRepository},
        seed::SeedData,
    },
    application::{
        checkable::{self, CheckableDependencies},
        library::{self, LibraryDependencies},
    },
    config::Config,
    domain::LibraryName,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // .envがあれば読み込む
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "library_catalog=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env()?;
    tracing::info!("Seed file: {}", config.seed_path.display());

    // Initialize adapters
    let checkable_deps = CheckableDependencies {
        checkable_repository: Arc::new(CheckableRepository::new()),
    };
    let library_deps = LibraryDependencies {
        library_repository: Arc::new(LibraryRepository::new()),
        checkable_service: checkable_deps.clone(),
    };

    SeedData::from_path(&config.seed_path)?
        .apply(&checkable_deps, &library_deps)
        .await?;

    // 在庫レポート
    for item in checkable::get_all(&checkable_deps).await? {
        let available =
            library::get_libraries_with_available_checkout(&library_deps, item.isbn()).await?;
        let total: u32 = available.iter().map(|a| a.available).sum();
        tracing::info!(
            isbn = %item.isbn(),
            title = item.title(),
            libraries = available.len(),
            total,
            "availability"
        );
    }

    // 延滞レポート
    let report_libraries: Vec<LibraryName> = match config.report_library {
        Some(name) => vec![name],
        None => library::get_libraries(&library_deps)
            .await?
            .iter()
            .map(|l| l.name().clone())
            .collect(),
    };

    for name in report_libraries {
        let overdue = library::get_overdue_checkouts(&library_deps, &name).await?;
        for entry in &overdue {
            tracing::info!(
                library = %name,
                patron = %entry.patron.name,
                isbn = %entry.checkout.checkable.isbn(),
                due_date = %entry.checkout.due_date,
                "overdue checkout"
            );
        }
        tracing::info!(library = %name, count = overdue.len(), "overdue report finished");
    }

    Ok(())
}
