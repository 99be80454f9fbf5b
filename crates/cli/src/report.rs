//! Terminal rendering of simulation results.

use prettytable::{Table, format, row};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use wheel_lab_domain::{CONTRACT_SIZE, OptionCadence, OptionSide, PricePath};
use wheel_lab_simulation::event::{EventData, EventLog};
use wheel_lab_simulation::state::SimulationSummary;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Formats dollars with no cents and thousands separators, e.g. `$12,400`.
pub fn format_currency(value: f64) -> String {
    match Decimal::from_f64(value) {
        Some(d) => format_decimal_currency(d),
        None => "n/a".to_string(),
    }
}

/// Formats a decimal dollar amount, rounding half away from zero.
pub fn format_decimal_currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Formats a fraction as a percentage with at most one decimal, e.g. `62.5%`.
pub fn format_percent(fraction: f64) -> String {
    match Decimal::from_f64(fraction * 100.0) {
        Some(d) => format!(
            "{}%",
            d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
                .normalize()
        ),
        None => "n/a".to_string(),
    }
}

/// Day index for each month label, spread evenly over `len` days.
pub fn month_ticks(len: usize) -> Vec<(&'static str, usize)> {
    if len == 0 {
        return Vec::new();
    }
    let spacing = (len / MONTHS.len()).max(1);
    MONTHS
        .iter()
        .enumerate()
        .map(|(i, label)| (*label, (i * spacing).min(len - 1)))
        .collect()
}

fn boxed() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table
}

/// Headline statistics.
pub fn summary_table(summary: &SimulationSummary) -> Table {
    let mut table = boxed();
    table.set_titles(row!["Metric", "Value", "Note"]);

    let verdict = if summary.wheel_led() {
        "Wheel led on average"
    } else {
        "Buy & hold led on average"
    };

    table.add_row(row![
        "Mean finish (buy & hold)",
        format_currency(summary.buy_hold_mean_terminal),
        ""
    ]);
    table.add_row(row![
        "Mean finish (wheel)",
        format_currency(summary.wheel_mean_terminal),
        format!("{} vs buy & hold", format_currency(summary.wheel_edge()))
    ]);
    table.add_row(row![
        "Wheel win rate",
        format_percent(summary.wheel_win_rate),
        verdict
    ]);
    table.add_row(row![
        "Average assignments",
        format!("{:.1}", summary.mean_assignments),
        format!("{} of option sales", format_percent(summary.assignment_rate()))
    ]);
    table.add_row(row![
        "Average premium harvested",
        format_currency(summary.mean_premium),
        "Across the simulated year"
    ]);
    table.add_row(row![
        "Option sales per path",
        format!("{:.1}", summary.mean_option_sales),
        ""
    ]);
    table
}

/// Mean portfolio value of both strategies at each month tick.
pub fn monthly_table(summary: &SimulationSummary) -> Table {
    let mut table = boxed();
    table.set_titles(row!["Month", "Day", "Buy & hold", "Wheel"]);

    for (label, day) in month_ticks(summary.avg_buy_hold_series.len()) {
        let buy_hold = summary.avg_buy_hold_series.get(day).copied().unwrap_or(0.0);
        let wheel = summary.avg_wheel_series.get(day).copied().unwrap_or(0.0);
        table.add_row(row![
            label,
            day,
            format_currency(buy_hold),
            format_currency(wheel)
        ]);
    }
    table
}

/// Daily opens and closes of a path, sampled every `every` days.
///
/// The final day is always included.
pub fn sample_path_table(path: &PricePath, every: usize) -> Table {
    let mut table = boxed();
    table.set_titles(row!["Day", "Open", "Close", "Contract value"]);

    let every = every.max(1);
    let last = path.len().saturating_sub(1);
    for day in (0..path.len()).filter(|d| d % every == 0 || *d == last) {
        table.add_row(row![
            day,
            format!("{:.2}", path.open[day]),
            format!("{:.2}", path.close[day]),
            format_currency(path.close[day] * f64::from(CONTRACT_SIZE))
        ]);
    }
    table
}

fn describe_side(side: &OptionSide) -> String {
    match side {
        OptionSide::Put { strike } => format!("put @ {strike:.2}"),
        OptionSide::Call { strike } => format!("call @ {strike:.2}"),
    }
}

/// One row per wheel event.
pub fn events_table(events: &EventLog) -> Table {
    let mut table = boxed();
    table.set_titles(row!["Day", "Price", "Event", "Detail"]);

    for event in events.events() {
        let day = event
            .day
            .map_or_else(|| "open".to_string(), |d| d.to_string());
        let (name, detail) = match &event.data {
            EventData::OptionSold { side, premium } => (
                "sold",
                format!("{} for {}", describe_side(side), format_currency(*premium)),
            ),
            EventData::Assigned {
                side,
                shares_after,
                cash_after,
            } => (
                "assigned",
                format!(
                    "{}, now {} shares, {} cash",
                    describe_side(side),
                    shares_after,
                    format_currency(*cash_after)
                ),
            ),
            EventData::ExpiredWorthless { side } => ("expired", describe_side(side)),
        };
        table.add_row(row![day, format!("{:.2}", event.price), name, detail]);
    }
    table
}

/// One-line tally of a path's wheel trades.
pub fn trade_summary(events: &EventLog, total_premium: f64) -> String {
    format!(
        "sales {}, assignments {}, premium {}",
        events.option_sale_count(),
        events.assignment_count(),
        format_currency(total_premium)
    )
}

/// Side-by-side comparison of cadences run on the same seed.
pub fn cadence_table(results: &[(OptionCadence, SimulationSummary)]) -> Table {
    let mut table = boxed();
    table.set_titles(row![
        "Cadence",
        "Days",
        "Buy & hold",
        "Wheel",
        "Win rate",
        "Assignments",
        "Premium"
    ]);

    for (cadence, summary) in results {
        table.add_row(row![
            cadence,
            cadence.trading_days(),
            format_currency(summary.buy_hold_mean_terminal),
            format_currency(summary.wheel_mean_terminal),
            format_percent(summary.wheel_win_rate),
            format!("{:.1}", summary.mean_assignments),
            format_currency(summary.mean_premium)
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use wheel_lab_simulation::event::WheelEvent;

    #[test]
    fn test_currency_formatting() {
        assert_eq!(format_decimal_currency(dec!(12400.4)), "$12,400");
        assert_eq!(format_decimal_currency(dec!(1234567.5)), "$1,234,568");
        assert_eq!(format_decimal_currency(dec!(999)), "$999");
        assert_eq!(format_decimal_currency(dec!(-2500.5)), "-$2,501");
        assert_eq!(format_decimal_currency(dec!(-0.2)), "$0");
        assert_eq!(format_currency(10_000.0), "$10,000");
        assert_eq!(format_currency(f64::NAN), "n/a");
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.625), "62.5%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(1.0), "100%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_month_ticks() {
        let ticks = month_ticks(252);
        assert_eq!(ticks.len(), 12);
        assert_eq!(ticks[0], ("Jan", 0));
        assert_eq!(ticks[11], ("Dec", 231));

        let short = month_ticks(5);
        assert_eq!(short[11], ("Dec", 4));
        assert!(month_ticks(0).is_empty());
    }

    #[test]
    fn test_summary_table_verdict() {
        let summary = SimulationSummary {
            buy_hold_mean_terminal: 11_000.0,
            wheel_mean_terminal: 11_400.0,
            wheel_win_rate: 0.6,
            ..SimulationSummary::default()
        };
        let rendered = summary_table(&summary).to_string();

        assert!(rendered.contains("$11,400"));
        assert!(rendered.contains("60%"));
        assert!(rendered.contains("Wheel led on average"));
    }

    #[test]
    fn test_sample_path_table_includes_last_day() {
        let mut path = PricePath::with_capacity(5);
        let days = [
            (100.0, 101.0),
            (101.0, 102.0),
            (102.0, 99.0),
            (99.0, 98.0),
            (98.0, 97.5),
        ];
        for (open, close) in days {
            path.push(open, close);
        }

        let table = sample_path_table(&path, 3);
        // Days 0, 3 and 4.
        assert_eq!(table.len(), 3);
        assert!(table.to_string().contains("$9,750"));
    }

    #[test]
    fn test_events_table() {
        let mut log = EventLog::new();
        log.record(WheelEvent::option_sold(
            None,
            100.0,
            OptionSide::Put { strike: 95.0 },
            200.0,
        ));
        log.record(WheelEvent::expired_worthless(
            20,
            101.0,
            OptionSide::Put { strike: 95.0 },
        ));

        let rendered = events_table(&log).to_string();
        assert!(rendered.contains("open"));
        assert!(rendered.contains("put @ 95.00 for $200"));
        assert!(rendered.contains("expired"));
        assert_eq!(trade_summary(&log, 200.0), "sales 1, assignments 0, premium $200");
    }
}
