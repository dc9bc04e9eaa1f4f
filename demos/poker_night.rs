//! Settling a poker night.
//!
//! Shows the engine on raw quantities, then the full session flow with
//! player names and a big blind worth a few cents.

use debt_settler::core::position::NetPositions;
use debt_settler::io::input::SessionInput;
use debt_settler::optimization::settlement::{SettlementConfig, SettlementEngine};
use debt_settler::session::settle_session;
use rust_decimal_macros::dec;

fn main() {
    // --- Scenario 1: raw quantities ---
    println!("━━━ Scenario 1: Engine only ━━━\n");

    let start = [dec!(100), dec!(150), dec!(200)];
    let end = [dec!(90), dec!(160), dec!(200)];
    let positions = NetPositions::from_quantities(&start, &end).expect("same length");

    for (id, net) in positions.iter() {
        let status = if net > dec!(0) {
            "CREDITOR"
        } else if net < dec!(0) {
            "DEBTOR"
        } else {
            "FLAT"
        };
        println!("  {:<4} {:>8}  [{}]", id, net, status);
    }

    let plan = SettlementEngine::settle(&start, &end).expect("balanced session");
    println!();
    for transfer in &plan {
        println!(
            "  {} pays {} to {}",
            transfer.from(),
            transfer.amount(),
            transfer.to()
        );
    }
    println!();

    // --- Scenario 2: full session ---
    println!("━━━ Scenario 2: Six players, big blind = 0.10 ━━━\n");

    let input = SessionInput {
        start: "200, 200, 200, 200, 200, 200".to_string(),
        end: "35, 410, 200, 120.5, 279.5, 155".to_string(),
        names: Some("Ana, Ben, Cleo, Dev, Eli, Fay".to_string()),
        unit_value: Some("0.10".to_string()),
    };

    match input
        .validate()
        .and_then(|session| settle_session(&session, &SettlementConfig::default()))
    {
        Ok(report) => println!("{}", report),
        Err(e) => eprintln!("Cannot settle: {}", e),
    }
}
