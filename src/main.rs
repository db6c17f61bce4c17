use crate::predictor::PredictorClient;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod predictor;
mod responses;
mod router;
mod templates;


fn main() {
    // Client for the external fraud-scoring API.
    // PREDICT_API_URL overrides the default http://localhost:8000.
    let predictor = match PredictorClient::new() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ Predictor client initialization failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // Serve requests, passing the predictor handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &predictor) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
