use crate::engines::SignalSeries;
use crate::functions::indicators::SMA;
use crate::functions::traits::Indicator;
use crate::types::Signal;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

/// Close, short MA and long MA against row index, with crossover markers
pub struct PriceChart;

impl PriceChart {
    pub fn show(ui: &mut egui::Ui, signals: &SignalSeries) {
        let rows = signals.rows();
        let close = Self::points(rows.iter().map(|row| row.close));
        let short = Self::points(rows.iter().map(|row| row.short_ma));
        let long = Self::points(rows.iter().map(|row| row.long_ma));

        let mut buys = Vec::new();
        let mut sells = Vec::new();
        for crossover in signals.crossovers() {
            let Some(price) = rows[crossover.index].close else {
                continue;
            };
            let point = [crossover.index as f64, price];
            match crossover.signal {
                Signal::Buy => buys.push(point),
                Signal::Sell => sells.push(point),
                Signal::Undefined => {}
            }
        }

        let dates: Vec<String> = rows.iter().map(|row| row.date.clone()).collect();

        Plot::new("price_chart")
            .legend(Legend::default())
            .height(320.0)
            .x_axis_formatter(move |mark, _range| {
                let index = mark.value.round();
                if index < 0.0 || (mark.value - index).abs() > f64::EPSILON {
                    return String::new();
                }
                dates.get(index as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new("Close", PlotPoints::from(close)));
                plot_ui.line(Line::new(
                    Self::average_name("Short", signals.short_window()),
                    PlotPoints::from(short),
                ));
                plot_ui.line(Line::new(
                    Self::average_name("Long", signals.long_window()),
                    PlotPoints::from(long),
                ));
                plot_ui.points(
                    Points::new("Buy crossover", PlotPoints::from(buys))
                        .shape(MarkerShape::Up)
                        .radius(5.0)
                        .color(egui::Color32::from_rgb(0, 160, 0)),
                );
                plot_ui.points(
                    Points::new("Sell crossover", PlotPoints::from(sells))
                        .shape(MarkerShape::Down)
                        .radius(5.0)
                        .color(egui::Color32::from_rgb(200, 0, 0)),
                );
            });
    }

    fn average_name(prefix: &str, window: usize) -> String {
        let sma = SMA::new(window);
        format!("{} {} ({})", prefix, sma.alias(), window)
    }

    // Undefined values are left out, so the MA lines start after warm-up.
    fn points(values: impl Iterator<Item = Option<f64>>) -> Vec<[f64; 2]> {
        values
            .enumerate()
            .filter_map(|(i, value)| value.map(|v| [i as f64, v]))
            .collect()
    }
}
