//! Souk Dispatch - courier assignment from the command line

mod cli;
mod logger;

use anyhow::{Context, bail};
use clap::Parser;
use shared::delivery::ZoneDirectory;
use shared::models::{Courier, Order};
use souk_client::{
    AssignmentDecision, AssignmentOutcome, BatchReport, ClientConfig, ClientError, SoukClient,
};

use cli::{Cli, Command, DEFAULT_SESSION_FILE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env must be loaded before clap reads env-backed flags
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    logger::init_logger(&cli.log_level, cli.log_dir.as_deref());

    let client = build_client(&cli)?;

    if let Err(e) = run(cli.command, &client).await {
        if let Some(client_err) = e.downcast_ref::<ClientError>() {
            tracing::error!(status = client_err.status(), "Command failed: {client_err}");
            if client_err.requires_login() {
                bail!("{} (run `souk-dispatch login` again)", client_err.user_message());
            }
            bail!("{}", client_err.user_message());
        }
        return Err(e);
    }
    Ok(())
}

fn build_client(cli: &Cli) -> anyhow::Result<SoukClient> {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config.base_url = url.clone();
    }
    config.session_file = Some(
        cli.session_file
            .clone()
            .or(config.session_file)
            .unwrap_or_else(|| DEFAULT_SESSION_FILE.into()),
    );
    tracing::debug!(base_url = %config.base_url, "Loaded configuration");
    SoukClient::new(&config).context("Invalid client configuration")
}

async fn run(command: Command, client: &SoukClient) -> anyhow::Result<()> {
    match command {
        Command::Login { email, password } => {
            let user = client.auth().login(&email, &password).await?;
            println!("Logged in as {} <{}> ({:?})", user.name, user.email, user.role);
        }
        Command::Logout => {
            client.auth().logout().await?;
            println!("Logged out");
        }
        Command::Whoami => {
            let user = client.auth().me().await?;
            println!("{} <{}> ({:?})", user.name, user.email, user.role);
        }
        Command::Pending => {
            let orders = client.delivery().pending_orders().await?;
            if orders.is_empty() {
                println!("No pending orders");
            }
            for order in &orders {
                print_order(order);
            }
        }
        Command::Couriers { zone } => {
            let couriers = client.delivery().couriers(zone.as_deref()).await?;
            if couriers.is_empty() {
                println!("No couriers");
            }
            for courier in &couriers {
                print_courier(courier);
            }
        }
        Command::Zones => {
            for zone in client.delivery().zones().await? {
                println!("{:<6} {:<20} {}", zone.code, zone.name, zone.cities.join(", "));
            }
        }
        Command::Assign {
            order_id,
            courier: Some(courier_id),
        } => {
            let order = client.delivery().assign(&order_id, &courier_id).await?;
            println!("Order {} assigned to {}", order.id, courier_id);
        }
        Command::Assign {
            order_id,
            courier: None,
        } => {
            let delivery = client.delivery();
            let pending = delivery.pending_orders().await?;
            let Some(order) = pending.iter().find(|o| o.id == order_id) else {
                bail!("Order {order_id} is not waiting for a courier");
            };
            let zones = delivery.zone_directory().await?;
            match delivery.select_and_assign(order, &zones).await? {
                AssignmentDecision::Assigned { courier_id, .. } => {
                    println!("Order {order_id} assigned to {courier_id}");
                }
                AssignmentDecision::NoEligibleCourier(reason) => {
                    println!("Order {order_id} not assigned: {reason}");
                }
            }
        }
        Command::AutoAssign { order_id } => {
            let assignment = client.delivery().auto_assign(&order_id).await?;
            println!(
                "Order {} assigned to {} ({})",
                assignment.order_id,
                assignment.livreur_id,
                assignment.livreur_name.as_deref().unwrap_or("-")
            );
        }
        Command::AssignAll => {
            let report = client
                .delivery()
                .assign_all_pending(&ZoneDirectory::default())
                .await?;
            print_report(&report);
        }
        Command::AdminAssign {
            order_id,
            courier_id,
        } => {
            let order = client.admin().assign_courier(&order_id, &courier_id).await?;
            println!("Order {} assigned to {} by admin", order.id, courier_id);
        }
    }
    Ok(())
}

fn print_order(order: &Order) {
    println!(
        "{:<26} {:<20} zone={:<6} {:>10} {}",
        order.id,
        order.shipping_address.city,
        order.zone.as_deref().unwrap_or("-"),
        order.total_amount,
        order.status
    );
}

fn print_courier(courier: &Courier) {
    println!(
        "{:<26} {:<20} {}/{} rating {:.1} zones [{}]{}",
        courier.id,
        courier.name,
        courier.current_orders,
        courier.max_orders,
        courier.rating,
        courier.zones.join(","),
        if courier.is_available { "" } else { " (unavailable)" }
    );
}

fn print_report(report: &BatchReport) {
    for outcome in &report.outcomes {
        match &outcome.outcome {
            AssignmentOutcome::Assigned { courier_id } => {
                println!("  {} -> {}", outcome.order_id, courier_id);
            }
            AssignmentOutcome::NoCourier { reason } => {
                println!("  {} !! {}", outcome.order_id, reason);
            }
            AssignmentOutcome::Failed { error } => {
                println!("  {} !! {}", outcome.order_id, error);
            }
        }
    }
    println!(
        "{} assigned, {} not assigned ({} total)",
        report.succeeded,
        report.failed,
        report.total()
    );
}
