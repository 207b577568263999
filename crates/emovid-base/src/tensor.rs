use std::fmt;

#[derive(Debug, PartialEq)]
pub enum TensorError {
    DimOverflow,
    LengthMismatch { expected: usize, got: usize },
}

impl fmt::Display for TensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorError::DimOverflow => write!(f, "shape dimensions overflow usize"),
            TensorError::LengthMismatch { expected, got } => {
                write!(f, "data length mismatch: shape wants {expected} elements, got {got}")
            }
        }
    }
}

impl std::error::Error for TensorError {}

/// Dense row-major container for pixel and model data.
///
/// Frames use shape `[height, width, 3]`, model inputs `[1, 3, H, W]`,
/// score vectors `[1, classes]`.
#[derive(Clone, PartialEq)]
pub struct Tensor<T> {
    pub shape: Vec<usize>,
    pub data: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("len", &self.data.len())
            .finish()
    }
}

fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    let mut n: usize = 1;
    for &dim in shape {
        n = n.checked_mul(dim).ok_or(TensorError::DimOverflow)?;
    }
    Ok(n)
}

impl<T> Tensor<T> {
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = element_count(&shape)?;
        if expected != data.len() {
            return Err(TensorError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Default + Clone> Tensor<T> {
    pub fn zeros(shape: Vec<usize>) -> Result<Self, TensorError> {
        let n = element_count(&shape)?;
        Ok(Self {
            shape,
            data: vec![T::default(); n],
        })
    }
}
