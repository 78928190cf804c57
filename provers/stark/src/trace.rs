use starklite_math::fft::{errors::FFTError, inverse_fft};
use starklite_math::field::{
    element::FieldElement,
    traits::{IsField, IsTwoAdicField},
};
use starklite_math::polynomial::Polynomial;

#[cfg(feature = "parallel")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::errors::TraceError;

/// A two-dimensional representation of an execution trace: rows are steps of
/// the computation, columns are registers. The number of rows must be a power
/// of two; traces of any other length are rejected rather than padded, since
/// padding rows would have to satisfy the transition constraints too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceTable<F: IsField> {
    data: Vec<FieldElement<F>>,
    n_cols: usize,
}

impl<F: IsField> TraceTable<F> {
    pub fn new(data: Vec<FieldElement<F>>, n_cols: usize) -> Result<Self, TraceError> {
        if n_cols == 0 {
            return Err(TraceError::LengthNotPowerOfTwo(0));
        }
        let n_rows = data.len() / n_cols;
        if data.len() % n_cols != 0 {
            return Err(TraceError::InconsistentRowWidth {
                row: n_rows,
                expected: n_cols,
                got: data.len() % n_cols,
            });
        }
        if !n_rows.is_power_of_two() {
            return Err(TraceError::LengthNotPowerOfTwo(n_rows));
        }
        Ok(Self { data, n_cols })
    }

    pub fn from_rows(rows: Vec<Vec<FieldElement<F>>>) -> Result<Self, TraceError> {
        let n_cols = rows.first().map_or(0, Vec::len);
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(TraceError::InconsistentRowWidth {
                    row: row_idx,
                    expected: n_cols,
                    got: row.len(),
                });
            }
        }
        Self::new(rows.into_iter().flatten().collect(), n_cols)
    }

    pub fn from_columns(columns: Vec<Vec<FieldElement<F>>>) -> Result<Self, TraceError> {
        let n_cols = columns.len();
        let n_rows = columns.first().map_or(0, Vec::len);
        for (col_idx, column) in columns.iter().enumerate() {
            if column.len() != n_rows {
                return Err(TraceError::InconsistentRowWidth {
                    row: col_idx,
                    expected: n_rows,
                    got: column.len(),
                });
            }
        }
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row_idx in 0..n_rows {
            for column in &columns {
                data.push(column[row_idx].clone());
            }
        }
        Self::new(data, n_cols)
    }

    pub fn n_rows(&self) -> usize {
        if self.n_cols == 0 {
            0
        } else {
            self.data.len() / self.n_cols
        }
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn get_row(&self, row_idx: usize) -> &[FieldElement<F>] {
        let offset = row_idx * self.n_cols;
        &self.data[offset..offset + self.n_cols]
    }

    pub fn rows(&self) -> Vec<Vec<FieldElement<F>>> {
        (0..self.n_rows())
            .map(|row_idx| self.get_row(row_idx).to_vec())
            .collect()
    }

    pub fn columns(&self) -> Vec<Vec<FieldElement<F>>> {
        (0..self.n_cols)
            .map(|col_idx| {
                (0..self.n_rows())
                    .map(|row_idx| self.data[row_idx * self.n_cols + col_idx].clone())
                    .collect()
            })
            .collect()
    }
}

impl<F: IsTwoAdicField> TraceTable<F> {
    /// Interpolates each column on the trace domain `{g^i}`, returning one
    /// polynomial of degree below the trace length per register. Columns are
    /// independent, so this is a pure data-parallel loop.
    pub fn compute_trace_polys(&self) -> Result<Vec<Polynomial<FieldElement<F>>>, FFTError>
    where
        FieldElement<F>: Send + Sync,
    {
        let root = F::generator_of_order(self.n_rows() as u64)?;
        let columns = self.columns();

        #[cfg(feature = "parallel")]
        let iter = columns.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = columns.iter();

        iter.map(|column| Ok(Polynomial::new(&inverse_fft(column, &root)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FE;

    fn elements(values: &[u64]) -> Vec<FE> {
        values.iter().map(|v| FE::from(*v)).collect()
    }

    #[test]
    fn from_columns_transposes() {
        let col_1 = elements(&[1, 2, 5, 13]);
        let col_2 = elements(&[1, 3, 8, 21]);

        let trace = TraceTable::from_columns(vec![col_1.clone(), col_2.clone()]).unwrap();
        assert_eq!(trace.get_row(1), &[FE::from(2), FE::from(3)]);
        assert_eq!(trace.columns(), vec![col_1, col_2]);
    }

    #[test]
    fn non_power_of_two_traces_are_rejected() {
        let rows: Vec<Vec<FE>> = (0..6).map(|i| elements(&[i])).collect();
        assert_eq!(
            TraceTable::from_rows(rows),
            Err(TraceError::LengthNotPowerOfTwo(6))
        );
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![elements(&[1, 2]), elements(&[3])];
        assert_eq!(
            TraceTable::from_rows(rows),
            Err(TraceError::InconsistentRowWidth {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }

    #[test]
    fn trace_polys_interpolate_the_columns() {
        use starklite_math::field::traits::IsTwoAdicField;

        let trace = TraceTable::from_columns(vec![elements(&[3, 1, 4, 1])]).unwrap();
        let polys = trace.compute_trace_polys().unwrap();
        let g = crate::PrimeField::generator_of_order(4).unwrap();

        assert_eq!(polys.len(), 1);
        for (step, expected) in elements(&[3, 1, 4, 1]).iter().enumerate() {
            assert_eq!(polys[0].evaluate(&g.pow(step as u64)), expected.clone());
        }
    }
}
