use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use user_management_api::{config::EnvironmentConfig, create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("👤 User Management API");
    info!("================================================");

    let listener = tokio::net::TcpListener::bind(config.server_url()).await?;
    let addr = listener.local_addr()?;
    let environment = config.environment.clone();
    let app = create_app(AppState::new(config));

    info!("🌐 Servidor iniciando en http://{} ({})", addr, environment);
    info!("🔍 Endpoints disponibles (requieren Authorization: Bearer <AUTH_TOKEN>):");
    info!("   GET    /users       - Listar usuarios (?ids=1&ids=2)");
    info!("   GET    /users/:id   - Obtener usuario");
    info!("   POST   /users/      - Crear usuario");
    info!("   PUT    /users/:id   - Reemplazar usuario");
    info!("   DELETE /users/:id   - Eliminar usuario");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
