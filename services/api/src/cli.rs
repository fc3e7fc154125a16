use crate::commands::{
    run_application_feedback, run_application_score, run_product_completeness,
    run_shipping_quote, run_shop_completeness, ApplicationArgs, ProfileArgs, QuoteArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use evercraft::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "evercraft",
    about = "Serve or run the Evercraft shipping, eco-profile and seller-application calculators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Price shipping for a cart
    Shipping {
        #[command(subcommand)]
        command: ShippingCommand,
    },
    /// Score eco-profile completeness
    Eco {
        #[command(subcommand)]
        command: EcoCommand,
    },
    /// Screen seller applications
    Applications {
        #[command(subcommand)]
        command: ApplicationCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ShippingCommand {
    /// Quote every available rate for a subtotal or a cart CSV export
    Quote(QuoteArgs),
}

#[derive(Subcommand, Debug)]
enum EcoCommand {
    /// Score a shop eco-profile JSON document
    Shop(ProfileArgs),
    /// Score a product eco-profile JSON document
    Product(ProfileArgs),
}

#[derive(Subcommand, Debug)]
enum ApplicationCommand {
    /// Score a seller application JSON document
    Score(ApplicationArgs),
    /// Draft rejection feedback for a seller application
    Feedback(ApplicationArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Shipping {
            command: ShippingCommand::Quote(args),
        } => run_shipping_quote(args),
        Command::Eco {
            command: EcoCommand::Shop(args),
        } => run_shop_completeness(args),
        Command::Eco {
            command: EcoCommand::Product(args),
        } => run_product_completeness(args),
        Command::Applications {
            command: ApplicationCommand::Score(args),
        } => run_application_score(args),
        Command::Applications {
            command: ApplicationCommand::Feedback(args),
        } => run_application_feedback(args),
    }
}
