use super::primitives::Point;

/// Samples per curve segment when flattening the interpolated curve into a
/// polyline. Hourly samples sit a few pixels apart, so this keeps the
/// flattened curve visually smooth without inflating the primitive count.
const SEGMENT_SAMPLES: usize = 6;

/// Flattens a monotone cubic interpolation (Fritsch-Carlson tangents) of the
/// given knots into a polyline. The interpolant never overshoots local
/// extrema, so smoothed curves stay inside the data envelope. Inputs with
/// fewer than three points pass through unchanged.
#[must_use]
pub fn monotone_polyline(knots: &[Point]) -> Vec<Point> {
    if knots.len() < 3 {
        return knots.to_vec();
    }

    let tangents = monotone_tangents(knots);
    let mut out = Vec::with_capacity((knots.len() - 1) * SEGMENT_SAMPLES + 1);
    out.push(knots[0]);
    for i in 0..knots.len() - 1 {
        let (x0, y0) = knots[i];
        let (x1, y1) = knots[i + 1];
        let dx = x1 - x0;
        for step in 1..=SEGMENT_SAMPLES {
            let t = step as f64 / SEGMENT_SAMPLES as f64;
            let y = hermite(y0, y1, tangents[i] * dx, tangents[i + 1] * dx, t);
            out.push((x0 + t * dx, y));
        }
    }
    out
}

fn monotone_tangents(knots: &[Point]) -> Vec<f64> {
    let n = knots.len();
    let mut slopes = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = knots[i + 1].0 - knots[i].0;
        let dy = knots[i + 1].1 - knots[i].1;
        slopes.push(if dx != 0.0 { dy / dx } else { 0.0 });
    }

    let mut tangents = vec![0.0; n];
    tangents[0] = slopes[0];
    tangents[n - 1] = slopes[n - 2];
    for i in 1..n - 1 {
        let (prev, next) = (slopes[i - 1], slopes[i]);
        if prev * next <= 0.0 {
            tangents[i] = 0.0;
        } else {
            let candidate = (prev + next) / 2.0;
            let limit = 3.0 * prev.abs().min(next.abs());
            tangents[i] = candidate.clamp(-limit, limit);
        }
    }
    tangents
}

fn hermite(y0: f64, y1: f64, m0: f64, m1: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    (2.0 * t3 - 3.0 * t2 + 1.0) * y0
        + (t3 - 2.0 * t2 + t) * m0
        + (-2.0 * t3 + 3.0 * t2) * y1
        + (t3 - t2) * m1
}

/// Cuts circular gaps of the given radius out of a polyline, splitting it
/// into the sub-paths that remain outside every hole. Crossing points on the
/// hole boundary are computed exactly so the gaps look circular regardless
/// of sampling density.
#[must_use]
pub fn occlude_polyline(points: &[Point], holes: &[Point], radius: f64) -> Vec<Vec<Point>> {
    if holes.is_empty() || radius <= 0.0 {
        return if points.len() < 2 {
            Vec::new()
        } else {
            vec![points.to_vec()]
        };
    }

    let mut paths = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    for window in points.windows(2) {
        let (a, b) = (window[0], window[1]);
        let a_in = containing_hole(a, holes, radius);
        let b_in = containing_hole(b, holes, radius);

        match (a_in, b_in) {
            (None, None) => {
                if current.is_empty() {
                    current.push(a);
                }
                current.push(b);
            }
            (None, Some(hole)) => {
                if current.is_empty() {
                    current.push(a);
                }
                if let Some(entry) = circle_crossing(a, b, holes[hole], radius) {
                    current.push(entry);
                }
                flush(&mut paths, &mut current);
            }
            (Some(hole), None) => {
                flush(&mut paths, &mut current);
                if let Some(exit) = circle_crossing(b, a, holes[hole], radius) {
                    current.push(exit);
                }
                current.push(b);
            }
            (Some(_), Some(_)) => flush(&mut paths, &mut current),
        }
    }
    flush(&mut paths, &mut current);
    paths
}

fn flush(paths: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() >= 2 {
        paths.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn containing_hole(p: Point, holes: &[Point], radius: f64) -> Option<usize> {
    holes
        .iter()
        .position(|hole| distance(p, *hole) < radius)
}

fn distance(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// Point where the segment from `outside` to `inside` crosses the circle
/// boundary. `outside` must be at distance >= radius and `inside` < radius.
fn circle_crossing(outside: Point, inside: Point, center: Point, radius: f64) -> Option<Point> {
    let dx = inside.0 - outside.0;
    let dy = inside.1 - outside.1;
    let fx = outside.0 - center.0;
    let fy = outside.1 - center.1;

    let a = dx * dx + dy * dy;
    let b = 2.0 * (fx * dx + fy * dy);
    let c = fx * fx + fy * fy - radius * radius;
    if a == 0.0 {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some((outside.0 + t * dx, outside.1 + t * dy))
}
