/// Number of entries in the interrupt descriptor table.
pub const VECTOR_COUNT: usize = 256;

/// Exception vectors for which an i686 CPU pushes an error code before entering the handler.
///
/// These are architecture-defined (#DF, #TS, #NP, #SS, #GP, #PF, #AC, #CP, #VC, #SX) and must stay
/// in lock-step with the `ISR_ERRORCODE` stub macro, which does not push a dummy error code.
pub const ERROR_CODE_VECTORS: [u8; 10] = [8, 10, 11, 12, 13, 14, 17, 21, 29, 30];

/// Which assembly stub macro a vector expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StubShape {
    /// The CPU has already pushed an error code.
    ErrorCode,
    /// The stub pushes a zero in place of an error code.
    NoErrorCode,
}

impl StubShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StubShape::ErrorCode => "ISR_ERRORCODE",
            StubShape::NoErrorCode => "ISR_NOERRORCODE",
        }
    }
}

impl core::fmt::Display for StubShape {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn stub_shape(vector: u8) -> StubShape {
    if ERROR_CODE_VECTORS.contains(&vector) { StubShape::ErrorCode } else { StubShape::NoErrorCode }
}

/// Symbol name of the assembly entry stub for `vector`.
pub fn stub_symbol(vector: u8) -> String {
    format!("i686_isr{vector}")
}

/// Iterates every vector in ascending order.
pub fn vectors() -> impl Iterator<Item = u8> {
    0..=u8::MAX
}

const _: () = assert!(VECTOR_COUNT == (u8::MAX as usize) + 1);
