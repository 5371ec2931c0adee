use clap::Parser;

use pathway_web::run_server;

/// Serve the Career Pathway form.
#[derive(Debug, Parser)]
#[command(name = "pathway-web", version, about)]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port to listen on
    #[arg(long, default_value_t = 7860)]
    port: u16,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();
    run_server(&args.host, args.port).await
}
