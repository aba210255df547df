use pyo3::exceptions::{PyOverflowError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::{DecodeError, EncodeError, MAX_ENCODED_BYTES};

impl From<EncodeError> for PyErr {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::Overflow => PyOverflowError::new_err(err.to_string()),
            EncodeError::BufferTooSmall => PyValueError::new_err(err.to_string()),
        }
    }
}

impl From<DecodeError> for PyErr {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Overflow => PyOverflowError::new_err(err.to_string()),
            DecodeError::BufferTooSmall | DecodeError::NotMinimal => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

#[pyfunction]
#[pyo3(name = "encode")]
fn py_encode<'py>(py: Python<'py>, value: u64) -> PyResult<Bound<'py, PyBytes>> {
    let mut buf = [0u8; MAX_ENCODED_BYTES];
    let len = crate::encode(value, &mut buf)?;
    Ok(PyBytes::new(py, &buf[..len]))
}

#[pyfunction]
#[pyo3(name = "encoded_len")]
fn py_encoded_len(value: u64) -> PyResult<usize> {
    Ok(crate::encoded_len(value)?)
}

#[pyfunction]
#[pyo3(name = "decode")]
fn py_decode(data: &[u8]) -> PyResult<(u64, usize)> {
    Ok(crate::decode::<u64>(data)?)
}

#[pyfunction]
#[pyo3(name = "decode_all")]
fn py_decode_all(data: &[u8]) -> PyResult<Vec<u64>> {
    Ok(crate::decode_all::<u64>(data)?)
}

#[pymodule]
fn varint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_encode, m)?)?;
    m.add_function(wrap_pyfunction!(py_encoded_len, m)?)?;
    m.add_function(wrap_pyfunction!(py_decode, m)?)?;
    m.add_function(wrap_pyfunction!(py_decode_all, m)?)?;
    Ok(())
}
