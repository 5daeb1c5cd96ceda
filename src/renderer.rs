use colored::Colorize;

use crate::sorting_algorithms::Highlights;

const BAR: &str = "█ ";
const GAP: &str = "  ";

/// One column of the bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub height: u16,
    pub highlighted: bool,
}

/// Turns an array snapshot into bars, height proportional to value.
pub fn bars(values: &[i32], highlights: Highlights, scale: f32) -> Vec<Bar> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| Bar {
            height: bar_height(value, scale),
            highlighted: highlights.contains(index),
        })
        .collect()
}

fn bar_height(value: i32, scale: f32) -> u16 {
    if value <= 0 {
        return 0;
    }
    // a positive value always gets at least one row
    ((value as f32 * scale).ceil() as u16).max(1)
}

/// Paints bars into `rows` lines of text, top row first. Highlighted bars
/// are red, the rest blue.
pub fn paint(bars: &[Bar], rows: u16) -> Vec<String> {
    (0..rows)
        .map(|y| {
            let level = rows - y;
            let mut line = String::with_capacity(bars.len() * 2);
            for bar in bars {
                if bar.height >= level {
                    let cell = if bar.highlighted {
                        BAR.red()
                    } else {
                        BAR.blue()
                    };
                    line += &format!("{}", cell);
                } else {
                    line.push_str(GAP);
                }
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_follow_values() {
        let bars = bars(&[1, 4, 50], Highlights::pair(1, 2), 0.5);
        let heights: Vec<u16> = bars.iter().map(|bar| bar.height).collect();
        assert_eq!(heights, vec![1, 2, 25]);
        assert!(!bars[0].highlighted);
        assert!(bars[1].highlighted && bars[2].highlighted);
    }

    #[test]
    fn paints_from_the_top_down() {
        colored::control::set_override(false);
        let lines = paint(&bars(&[2, 1], Highlights::none(), 1.0), 2);
        assert_eq!(lines, vec!["█   ".to_string(), "█ █ ".to_string()]);
    }

    #[test]
    fn empty_array_paints_blank_rows() {
        let lines = paint(&[], 3);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.is_empty()));
    }
}
