//! Booking validation demo.
//!
//! Runs a fixed set of booking requests against a shared ticket inventory,
//! selling tickets for every request that passes validation.

use booking::{BookingRequest, Config, InputValidator, SharedInventory, TicketInventory};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional .env file; real environment variables take precedence
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let inventory = SharedInventory::new(config.total_tickets);
    let validator = InputValidator::new(config.validator);

    let rules = validator.config();
    info!(
        total_tickets = config.total_tickets,
        min_name_length = rules.min_name_length,
        name_length_mode = %rules.name_length_mode,
        "Configuration loaded"
    );

    println!("=== Booking Validation Example ===\n");

    let requests = [
        BookingRequest::new("Jo", "Do", "jo@example.com", 2),
        BookingRequest::new("J", "Do", "j@example.com", 1),
        BookingRequest::new("Ada", "Lovelace", "ada.example.com", 3),
        BookingRequest::new("Alan", "Turing", "alan@example.com", 0),
        BookingRequest::new("Grace", "Hopper", "grace@example.com", config.total_tickets),
    ];

    for request in &requests {
        println!(
            ">>> {} {} requests {} ticket(s) ({} remaining)",
            request.first_name,
            request.last_name,
            request.ticket_count,
            inventory.remaining()
        );

        let verdict = validator.validate(request, &inventory);
        if !verdict.is_valid() {
            for problem in verdict.problems() {
                println!("    rejected: {problem}");
            }
            continue;
        }

        match inventory.sell(request.ticket_count) {
            Ok(left) => println!(
                "    booked: confirmation sent to {}, {left} tickets remaining",
                request.email
            ),
            Err(e) => {
                warn!(error = %e, "Sale failed after validation");
                println!("    rejected: {e}");
            },
        }
    }

    if inventory.remaining() == 0 {
        println!("\nConference is booked out. Come back next year.");
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
