use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use embedded_tracker::common::common::setup_logging;
use embedded_tracker::config::structs::configuration::Configuration;
use embedded_tracker::server::structs::tracker_server::TrackerServer;
use embedded_tracker::structs::Cli;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let server = Arc::new(TrackerServer::new(config.clone()));
    TrackerServer::set_current(server.clone());

    if !server.start() {
        error!("[BOOT] Unable to start the tracker, exiting...");
        exit(1);
    }

    Builder::new_current_thread()
        .thread_name("console")
        .enable_all()
        .build()?
        .block_on(async {
            let tokio_shutdown = match Shutdown::new() {
                Ok(shutdown) => shutdown,
                Err(_) => {
                    error!("[BOOT] Unable to install the shutdown handler");
                    return;
                }
            };

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                error!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    error!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        error!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        error!("[DEADLOCK] {:#?}", t.backtrace());
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let stats_handler = tokio_shutdown.clone();
            let server_spawn_stats = server.clone();
            let console_interval = config.log_console_interval.max(1);
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = server_spawn_stats.get_stats();
                            info!(
                                "[STATS] Torrents: {} - Internal: {} - Seeds: {} - Peers: {} - Completed: {} | Rejected: {} - Expired: {}",
                                stats.torrents, stats.internal_torrents, stats.seeders, stats.peers, stats.completed,
                                stats.counters.security_rejections, stats.counters.peers_expired
                            );
                            info!(
                                "[STATS HTTP] A:{} S:{} F:{} 404:{} | [STATS UDP] Conn:{} A:{} S:{} E:{} BR:{} | [STATS LOCAL] A:{}",
                                stats.counters.http_announces_handled, stats.counters.http_scrapes_handled,
                                stats.counters.http_failures, stats.counters.http_not_found,
                                stats.counters.udp_connections_handled, stats.counters.udp_announces_handled,
                                stats.counters.udp_scrapes_handled, stats.counters.udp_errors, stats.counters.udp_bad_requests,
                                stats.counters.local_announces_handled
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");
                }
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                }
            }
        });

    TrackerServer::clear_current();
    server.stop();
    info!("Server shutting down completed");
    Ok(())
}
