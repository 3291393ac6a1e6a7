//! Some useful functions on flattened fields
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

/// Return field of length `n` with random values in [-c, c]
pub fn random_field(n: usize, c: f64) -> Array1<f64> {
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    Array1::random(n, Uniform::new_inclusive(-c, c))
}

/// Return l2 norm of real array
pub fn norm_l2_f64<S: Data<Elem = f64>>(array: &ArrayBase<S, Ix1>) -> f64 {
    array.iter().map(|x| x.powi(2)).sum::<f64>().sqrt()
}

/// Return (min, max) of column `j` of assembled rows,
/// e.g. j = 0 for the range of the diagonal Ap.
///
/// Returns `None` for empty rows.
pub fn column_range<S>(rows: &ArrayBase<S, Ix2>, j: usize) -> Option<(f64, f64)>
where
    S: Data<Elem = f64>,
{
    let column = rows.column(j);
    let first = *column.iter().next()?;
    Some(column.iter().fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_random_field() {
        let field = random_field(100, 0.3);
        assert_eq!(field.len(), 100);
        assert!(field.iter().all(|x| x.abs() <= 0.3));
    }

    #[test]
    fn test_norm_l2() {
        assert!((norm_l2_f64(&array![3., 4.]) - 5.).abs() < 1e-12);
    }

    #[test]
    fn test_column_range() {
        let rows = array![[1., 0.], [-2., 0.], [4., 1.]];
        assert_eq!(column_range(&rows, 0), Some((-2., 4.)));
        let empty = ndarray::Array2::<f64>::zeros((0, 7));
        assert_eq!(column_range(&empty, 0), None);
    }
}
