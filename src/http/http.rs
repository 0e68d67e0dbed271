use std::borrow::Cow;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::common::structs::custom_error::CustomError;
use crate::http::types::{HttpServiceQueryHashingMapErr, HttpServiceQueryHashingMapOk};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::peer_list::PeerList;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub const SCRAPE_NOT_SUPPORTED: &str = "Scrape not supported";

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<TorrentTracker>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds the HTTP listener and builds the server future.
///
/// Must be called inside a tokio runtime context. The caller spawns the
/// returned `Server`; the `ServerHandle` stops it. The bound addresses are
/// returned so a port of 0 can be resolved.
pub fn http_service(addr: SocketAddr, data: Arc<TorrentTracker>) -> std::io::Result<(ServerHandle, Server, Vec<SocketAddr>)>
{
    let http_config = data.config.http_server.clone();
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(http_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_config.disconnect_timeout))
        .workers(http_config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?;
    let addrs = server.addrs();
    let server = server.disable_signals().run();

    Ok((server.handle(), server, addrs))
}

pub fn http_service_failure(data: &TorrentTracker, reason: &str) -> HttpResponse
{
    data.update_stats(StatsEvent::HttpFailures, 1);
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!(reason.to_string())
    }.encode())
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<TorrentTracker>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };
    debug!("[HTTP] Request from {ip}: Announce");

    let query_map = match http_service_query_hashing(&data, parse_query(Some(request.query_string().to_string()))) {
        Ok(result) => result,
        Err(err) => return err,
    };

    let announce = match data.validate_announce(ip, query_map) {
        Ok(result) => result,
        Err(e) => return http_service_failure(&data, e.message()),
    };

    let (stats, peers) = match data.handle_announce(&announce) {
        Ok(result) => result,
        Err(e) => return http_service_failure(&data, &e.to_string()),
    };
    data.update_stats(StatsEvent::HttpAnnouncesHandled, 1);

    let peers = match peers {
        PeerList::Compact(bytes) => ben_bytes!(bytes),
        PeerList::Dict(dict_peers) => {
            let mut peers_list = ben_list!();
            if let Some(peers_list_mut) = peers_list.list_mut() {
                for peer in dict_peers {
                    peers_list_mut.push(ben_map! {
                        "peer id" => ben_bytes!(peer.peer_id.0.to_vec()),
                        "ip" => ben_bytes!(peer.ip.to_string()),
                        "port" => ben_int!(peer.port as i64)
                    });
                }
            }
            peers_list
        }
    };

    let interval = data.config.tracker_config.announce_interval as i64;
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "interval" => ben_int!(interval),
        "min interval" => ben_int!(interval / 2),
        "complete" => ben_int!(stats.complete as i64),
        "incomplete" => ben_int!(stats.incomplete as i64),
        "peers" => peers
    }.encode())
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<TorrentTracker>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => return result,
    };
    debug!("[HTTP] Request from {ip}: Scrape");

    if !data.config.tracker_config.scrape_enabled {
        return http_service_failure(&data, SCRAPE_NOT_SUPPORTED);
    }

    let query_map = match http_service_query_hashing(&data, parse_query(Some(request.query_string().to_string()))) {
        Ok(result) => result,
        Err(err) => return err,
    };

    let scrape = match data.validate_scrape(query_map) {
        Ok(result) => result,
        Err(e) => return http_service_failure(&data, e.message()),
    };

    let info_hashes = if scrape.info_hash.is_empty() {
        data.known_info_hashes()
    } else {
        scrape.info_hash
    };

    let mut scrape_list = ben_map!();
    if let Some(scrape_list_mut) = scrape_list.dict_mut() {
        for (info_hash, stats) in data.handle_scrape(&info_hashes) {
            scrape_list_mut.insert(Cow::from(info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(stats.complete as i64),
                "downloaded" => ben_int!(stats.downloaded as i64),
                "incomplete" => ben_int!(stats.incomplete as i64)
            });
        }
    }
    data.update_stats(StatsEvent::HttpScrapesHandled, 1);

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "files" => scrape_list
    }.encode())
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<TorrentTracker>>) -> HttpResponse
{
    debug!("[HTTP] Request for {}: 404 Not Found", request.path());
    data.update_stats(StatsEvent::HttpNotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}

/// Resolves the socket peer address and runs it through the security policy.
pub fn http_validate_ip(request: &HttpRequest, data: &TorrentTracker) -> Result<IpAddr, HttpResponse>
{
    let ip = match request.peer_addr() {
        Some(addr) => addr.ip(),
        None => return Err(http_service_failure(data, "unknown origin ip")),
    };
    if let Err(rejection) = data.security.check_request(ip) {
        data.update_stats(StatsEvent::SecurityRejections, 1);
        return Err(http_service_failure(data, &rejection.to_string()));
    }
    Ok(ip)
}

pub fn http_service_query_hashing(data: &TorrentTracker, query_map_result: Result<HttpServiceQueryHashingMapOk, CustomError>) -> Result<HttpServiceQueryHashingMapOk, HttpServiceQueryHashingMapErr>
{
    match query_map_result {
        Ok(e) => Ok(e),
        Err(e) => Err(http_service_failure(data, e.message())),
    }
}
