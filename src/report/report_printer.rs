use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::scaling::error::ScaleError;
use crate::scaling::pipeline::ScaleReport;
use crate::scaling::projection::FillProjection;
use crate::types::numeric::format_usd;
use crate::types::order::ScaledOrder;
use crate::types::side::Side;

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";
const YELLOW: &str = "\x1b[33m";

const WIDTH: usize = 70;

pub fn print_banner(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(WIDTH))
}

pub fn print_no_pending_orders(out: &mut impl Write, coin: &str) -> io::Result<()> {
    writeln!(out, "\nNo pending {coin} orders found for this account.")
}

pub fn print_failure(out: &mut impl Write, error: &anyhow::Error) -> io::Result<()> {
    match error.downcast_ref::<ScaleError>() {
        Some(ScaleError::DirectionMismatch { declared, actual }) => {
            writeln!(out)?;
            print_banner(out, "ERROR: Direction mismatch!")?;
            writeln!(out, "Your selected direction: {declared}")?;
            writeln!(out, "Account position direction: {actual}")?;
            writeln!(out, "\nCannot scale orders when directions do not match.")
        }
        _ => writeln!(out, "\nError: {error:#}"),
    }
}

pub fn print_report(out: &mut impl Write, report: &ScaleReport) -> io::Result<()> {
    writeln!(
        out,
        "\nAccount: {} {} {} @ {}",
        report.account_direction,
        report.account_size,
        report.coin,
        format_usd(report.entry_price)
    )?;
    writeln!(
        out,
        "You:     {} {} {} (scaling ratio: {})",
        report.account_direction, report.desired_size, report.coin, report.ratio
    )?;
    writeln!(out, "Pending orders: {}", report.orders.len())?;

    print_orders(out, &report.orders)?;

    match &report.buy_projection {
        Some(projection) => print_projection(out, projection, &report.coin)?,
        None => writeln!(out, "\nNo pending buy orders to summarize.")?,
    }

    match &report.sell_projection {
        Some(projection) => print_projection(out, projection, &report.coin)?,
        None => writeln!(out, "\nNo pending sell orders to summarize.")?,
    }

    Ok(())
}

/// Highest price first. Display only; the report keeps venue order.
fn print_orders(out: &mut impl Write, orders: &[ScaledOrder]) -> io::Result<()> {
    let mut sorted: Vec<&ScaledOrder> = orders.iter().collect();
    sorted.sort_by(|a, b| b.price.cmp(&a.price));

    writeln!(out, "\n{}", "-".repeat(WIDTH))?;
    writeln!(
        out,
        "{:<6} {:>12} {:>12} {:>15} {:>12}",
        "Side", "Price", "Scaled Size", "Original Size", "Notional"
    )?;
    writeln!(out, "{}", "-".repeat(WIDTH))?;

    for (index, order) in sorted.iter().enumerate() {
        let side_color = match order.side {
            Side::Buy => GREEN,
            Side::Sell => RED,
        };
        let row_color = if index % 2 == 1 { CYAN } else { YELLOW };

        writeln!(
            out,
            "{side_color}{:<6}{RESET}{row_color} {:>12} {:>12} {:>15} {:>12}{RESET}",
            order.side.to_string(),
            format_usd(order.price),
            fixed(order.scaled_size, 3),
            fixed(order.original_size, 5),
            format_usd(order.notional),
        )?;
    }

    Ok(())
}

fn print_projection(
    out: &mut impl Write,
    projection: &FillProjection,
    coin: &str,
) -> io::Result<()> {
    let (title, total_label) = match projection.side {
        Side::Buy => ("LONG SUMMARY (if all buy orders are filled)", "Buy Orders Total:"),
        Side::Sell => ("SHORT SUMMARY (if all sell orders are filled)", "Sell Orders Total:"),
    };

    writeln!(out)?;
    print_banner(out, title)?;
    writeln!(
        out,
        "{:<24} {:>12} {coin}",
        "Current Position:",
        fixed(projection.current_size, 3)
    )?;
    writeln!(
        out,
        "{:<24} {:>12} {coin}",
        total_label,
        fixed(projection.total_size, 3)
    )?;
    writeln!(
        out,
        "{:<24} {:>12} {coin}",
        "Net Position:",
        fixed(projection.net_position, 3)
    )?;

    if let Some(average_entry) = projection.average_entry {
        writeln!(
            out,
            "{:<24} {:>15}",
            "Average Entry Price:",
            format_usd(average_entry)
        )?;
    }

    writeln!(
        out,
        "{:<24} {:>15}",
        "Capital Required:",
        format_usd(projection.total_notional)
    )
}

fn fixed(value: Decimal, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, value.round_dp(decimals))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaling::ratio::ScalingRatio;
    use crate::types::direction::Direction;
    use rust_decimal_macros::dec;

    fn render(print: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn order(side: Side, size: Decimal, price: Decimal) -> ScaledOrder {
        ScaledOrder {
            side,
            price,
            original_size: size,
            scaled_size: size,
            notional: size * price,
        }
    }

    fn report() -> ScaleReport {
        ScaleReport {
            coin: "BTC".to_string(),
            account_direction: Direction::Long,
            account_size: dec!(0.5),
            entry_price: dec!(49000),
            desired_size: dec!(1),
            ratio: ScalingRatio::new(dec!(1), dec!(0.5)).unwrap(),
            orders: vec![
                order(Side::Buy, dec!(0.2), dec!(50000)),
                order(Side::Sell, dec!(0.4), dec!(51000)),
            ],
            buy_projection: Some(FillProjection {
                side: Side::Buy,
                current_size: dec!(1),
                total_size: dec!(0.2),
                total_notional: dec!(10000),
                net_position: dec!(1.2),
                average_entry: Some(dec!(49166.67)),
            }),
            sell_projection: None,
        }
    }

    #[test]
    fn fixed_pads_and_rounds() {
        assert_eq!(fixed(dec!(0.2), 3), "0.200");
        assert_eq!(fixed(dec!(0.12345678), 5), "0.12346");
        assert_eq!(fixed(dec!(-0.2), 3), "-0.200");
    }

    #[test]
    fn report_lists_orders_by_descending_price() {
        let text = render(|out| print_report(out, &report()));

        let sell_row = text.find("$51,000.00").unwrap();
        let buy_row = text.find("$50,000.00").unwrap();
        assert!(sell_row < buy_row);
        assert!(text.contains("scaling ratio: 2.0000"));
        assert!(text.contains("Pending orders: 2"));
        assert!(text.contains("$20,400.00"));
    }

    #[test]
    fn report_prints_projections() {
        let text = render(|out| print_report(out, &report()));

        assert!(text.contains("LONG SUMMARY (if all buy orders are filled)"));
        assert!(text.contains("Average Entry Price:"));
        assert!(text.contains("$49,166.67"));
        assert!(text.contains("Capital Required:"));
        assert!(text.contains("$10,000.00"));
        assert!(text.contains("No pending sell orders to summarize."));
    }

    #[test]
    fn projection_without_entry_skips_the_line() {
        let projection = FillProjection {
            side: Side::Sell,
            current_size: dec!(1),
            total_size: dec!(0.25),
            total_notional: dec!(13000),
            net_position: dec!(0.75),
            average_entry: None,
        };

        let text = render(|out| print_projection(out, &projection, "BTC"));

        assert!(text.contains("SHORT SUMMARY"));
        assert!(text.contains("0.750 BTC"));
        assert!(!text.contains("Average Entry Price"));
    }

    #[test]
    fn mismatch_failure_names_both_directions() {
        let error = anyhow::Error::from(ScaleError::DirectionMismatch {
            declared: Direction::Long,
            actual: Direction::Short,
        });

        let text = render(|out| print_failure(out, &error));

        assert!(text.contains("ERROR: Direction mismatch!"));
        assert!(text.contains("Your selected direction: LONG"));
        assert!(text.contains("Account position direction: SHORT"));
    }

    #[test]
    fn overflow_failure_is_printed_as_an_error() {
        let error = anyhow::Error::from(ScaleError::Overflow {
            operation: "scaled size",
        });

        let text = render(|out| print_failure(out, &error));

        assert!(text.contains("Error: scaled size overflowed"));
    }

    #[test]
    fn other_failures_print_the_error_chain() {
        let error = anyhow::anyhow!("connection refused").context("fetch open orders failed");

        let text = render(|out| print_failure(out, &error));

        assert!(text.contains("Error: fetch open orders failed: connection refused"));
    }
}
