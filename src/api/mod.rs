use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::health)
            .service(handlers::list_networks)
            .service(handlers::wallet_balances)
            .service(handlers::scan_connected_wallets)
            .service(handlers::scan_wallets),
    );
}
