//! Geometry of the daily sales line chart, in SVG user units.

use contracts::dashboards::d401_daily_sales::DailySalesPoint;

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 240.0;
pub const CHART_PADDING: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Place every point of the series inside the padded drawing area.
///
/// Points are spread evenly on x in series order; y is proportional to the
/// amount with the largest amount at the top. A single point sits in the
/// middle; an all-zero series lies on the baseline.
pub fn layout_points(series: &[DailySalesPoint], width: f64, height: f64, padding: f64) -> Vec<ChartPoint> {
    let inner_width = (width - 2.0 * padding).max(0.0);
    let inner_height = (height - 2.0 * padding).max(0.0);
    let baseline = height - padding;
    let max_amount = series.iter().fold(0.0_f64, |acc, p| acc.max(p.amount));
    let step = if series.len() > 1 {
        inner_width / (series.len() - 1) as f64
    } else {
        0.0
    };

    series
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let x = if series.len() == 1 {
                padding + inner_width / 2.0
            } else {
                padding + step * i as f64
            };
            let y = if max_amount > 0.0 {
                baseline - point.amount.max(0.0) / max_amount * inner_height
            } else {
                baseline
            };
            ChartPoint { x, y }
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline_points(points: &[ChartPoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal hover band `(start, width)` of each point: from the midpoint
/// with its left neighbour to the midpoint with its right neighbour.
pub fn hover_bands(points: &[ChartPoint], width: f64) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let start = if i == 0 {
                0.0
            } else {
                (points[i - 1].x + p.x) / 2.0
            };
            let end = match points.get(i + 1) {
                Some(next) => (p.x + next.x) / 2.0,
                None => width,
            };
            (start, end - start)
        })
        .collect()
}

/// The point named in the chart title: the hovered one, else the latest
pub fn headline_point(series: &[DailySalesPoint], hovered: Option<usize>) -> Option<&DailySalesPoint> {
    hovered
        .and_then(|i| series.get(i))
        .or_else(|| series.last())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, amount: f64) -> DailySalesPoint {
        DailySalesPoint {
            date: date.to_string(),
            amount,
        }
    }

    #[test]
    fn test_layout_spreads_points() {
        let series = vec![point("2024-01-01", 100.0), point("2024-01-02", 50.0), point("2024-01-03", 0.0)];
        let points = layout_points(&series, 220.0, 120.0, 10.0);

        assert_eq!(points[0], ChartPoint { x: 10.0, y: 10.0 });
        assert_eq!(points[1], ChartPoint { x: 110.0, y: 60.0 });
        assert_eq!(points[2], ChartPoint { x: 210.0, y: 110.0 });
    }

    #[test]
    fn test_single_point_is_centered() {
        let points = layout_points(&[point("2024-01-01", 42.0)], 220.0, 120.0, 10.0);
        assert_eq!(points, vec![ChartPoint { x: 110.0, y: 10.0 }]);
    }

    #[test]
    fn test_zero_series_on_baseline() {
        let series = vec![point("2024-01-01", 0.0), point("2024-01-02", 0.0)];
        let points = layout_points(&series, 220.0, 120.0, 10.0);
        assert!(points.iter().all(|p| p.y == 110.0));
    }

    #[test]
    fn test_empty_series() {
        assert!(layout_points(&[], CHART_WIDTH, CHART_HEIGHT, CHART_PADDING).is_empty());
        assert_eq!(polyline_points(&[]), "");
        assert!(hover_bands(&[], CHART_WIDTH).is_empty());
        assert_eq!(headline_point(&[], None), None);
    }

    #[test]
    fn test_polyline_points() {
        let points = vec![ChartPoint { x: 10.0, y: 20.24 }, ChartPoint { x: 30.0, y: 5.0 }];
        assert_eq!(polyline_points(&points), "10.0,20.2 30.0,5.0");
    }

    #[test]
    fn test_hover_bands_cover_the_width() {
        let points = vec![
            ChartPoint { x: 10.0, y: 0.0 },
            ChartPoint { x: 110.0, y: 0.0 },
            ChartPoint { x: 210.0, y: 0.0 },
        ];
        assert_eq!(
            hover_bands(&points, 220.0),
            vec![(0.0, 60.0), (60.0, 100.0), (160.0, 60.0)]
        );
    }

    #[test]
    fn test_headline_point() {
        let series = vec![point("2024-01-01", 230.0), point("2024-01-02", 690.0)];
        assert_eq!(headline_point(&series, None), Some(&series[1]));
        assert_eq!(headline_point(&series, Some(0)), Some(&series[0]));
        assert_eq!(headline_point(&series, Some(9)), Some(&series[1]));
    }
}
