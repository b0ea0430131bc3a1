use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use pxpay_gateway::application::gateway::PxPayGateway;
use pxpay_gateway::config::{DEFAULT_ENDPOINT, GatewayConfig};
use pxpay_gateway::domain::completion::ReturnParams;
use pxpay_gateway::domain::intent::PaymentIntent;
use pxpay_gateway::domain::ports::GatewayTransportBox;
use pxpay_gateway::domain::result::PaymentResult;
use pxpay_gateway::infrastructure::http::HttpTransport;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// PxPay user id
    #[arg(long, env = "PXPAY_USER_ID")]
    user_id: String,

    /// PxPay key
    #[arg(long, env = "PXPAY_KEY", hide_env_values = true)]
    key: String,

    /// Gateway endpoint both request types are posted to
    #[arg(long, env = "PXPAY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Request a hosted page for an authorization
    Authorize(IntentArgs),
    /// Request a hosted page for a purchase
    Purchase(IntentArgs),
    /// Resolve an authorization from the return-leg query string
    CompleteAuthorize(ReturnArgs),
    /// Resolve a purchase from the return-leg query string
    CompletePurchase(ReturnArgs),
}

#[derive(Args)]
struct IntentArgs {
    /// Amount in minor currency units (e.g. 1000 for 10.00)
    #[arg(long)]
    amount: i64,

    /// Absolute URL the customer returns to
    #[arg(long)]
    return_url: String,

    /// ISO 4217 currency code
    #[arg(long)]
    currency: Option<String>,

    /// Absolute URL for failed payments (defaults to the return URL)
    #[arg(long)]
    cancel_url: Option<String>,

    #[arg(long)]
    transaction_id: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Stored card token to charge
    #[arg(long)]
    card_reference: Option<String>,

    /// Ask the gateway to store the card for later use
    #[arg(long)]
    save_card: bool,
}

impl IntentArgs {
    fn into_intent(self) -> pxpay_gateway::error::Result<PaymentIntent> {
        let mut builder =
            PaymentIntent::builder(self.amount, self.return_url).save_card(self.save_card);
        if let Some(currency) = self.currency {
            builder = builder.currency(currency);
        }
        if let Some(cancel_url) = self.cancel_url {
            builder = builder.cancel_url(cancel_url);
        }
        if let Some(transaction_id) = self.transaction_id {
            builder = builder.transaction_id(transaction_id);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(card_reference) = self.card_reference {
            builder = builder.card_reference(card_reference);
        }
        builder.build()
    }
}

#[derive(Args)]
struct ReturnArgs {
    /// Query string of the return request, e.g. "result=abc123"
    #[arg(long, default_value = "")]
    query: String,
}

async fn run(cli: Cli) -> pxpay_gateway::error::Result<PaymentResult> {
    let config = GatewayConfig::new(cli.user_id, cli.key).with_endpoint(cli.endpoint);
    let transport: GatewayTransportBox = Box::new(HttpTransport::new());
    let gateway = PxPayGateway::new(config, transport);

    match cli.command {
        Command::Authorize(args) => gateway.authorize(&args.into_intent()?).await,
        Command::Purchase(args) => gateway.purchase(&args.into_intent()?).await,
        Command::CompleteAuthorize(args) => {
            gateway
                .complete_authorize(&ReturnParams::from_query(&args.query))
                .await
        }
        Command::CompletePurchase(args) => {
            gateway
                .complete_purchase(&ReturnParams::from_query(&args.query))
                .await
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON result only.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = run(cli).await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &result).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;

    Ok(())
}
