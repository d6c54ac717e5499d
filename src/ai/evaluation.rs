use super::tree::LineFeatures;

/// Static estimate of a state's value from player one's perspective.
///
/// Implementations must not recurse into or enumerate successors.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// Running scores plus credit for pieces bordering open gaps.
///
/// Starting from the sum of both players' signed scores, every line is
/// scanned once for stretches of two or more empty cells. Rows and diagonals
/// credit the piece seen before the gap and the cell just past the piece that
/// closes it, and keep scanning; the empty count is never reset, so every
/// later piece in the line closes a "gap" too. Columns credit only the piece
/// before the gap and stop at the first one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GapEvaluator;

impl GapEvaluator {
    fn open_line(line: &[i8]) -> f64 {
        let Some(&first) = line.first() else {
            return 0.0;
        };
        let mut value = 0.0;
        let mut before = first;
        let mut empties = 0;

        for (n, &cell) in line.iter().enumerate() {
            if cell == 0 {
                empties += 1;
            } else if empties >= 2 {
                if before != 0 {
                    value += f64::from(before);
                }
                if let Some(&after) = line.get(n + 1) {
                    value += f64::from(after);
                }
                before = cell;
            } else {
                before = cell;
            }
        }
        value
    }

    fn open_column(line: &[i8]) -> f64 {
        let Some(&first) = line.first() else {
            return 0.0;
        };
        let mut before = first;
        let mut empties = 0;

        for &cell in line {
            if empties >= 2 && before != 0 {
                return f64::from(before);
            }
            if cell == 0 {
                empties += 1;
            } else {
                before = cell;
            }
        }
        0.0
    }
}

impl<S: LineFeatures> Evaluator<S> for GapEvaluator {
    fn evaluate(&self, state: &S) -> f64 {
        let (one, two) = state.scores();
        let mut value = one + two;

        for row in state.rows() {
            value += Self::open_line(&row);
        }
        for col in state.cols() {
            value += Self::open_column(&col);
        }
        for diag in state.diags() {
            value += Self::open_line(&diag);
        }
        value
    }
}
