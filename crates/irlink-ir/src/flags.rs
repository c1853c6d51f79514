//! Declaration modifier flags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifiers carried by a declaration.
    ///
    /// `EXPECT` and `ACTUAL` mark the two sides of a platform linkage; the rest
    /// are copied verbatim onto fake overrides.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct DeclFlags: u32 {
        const EXPECT = 1 << 0;
        const ACTUAL = 1 << 1;
        const INLINE = 1 << 2;
        const EXTERNAL = 1 << 3;
        const SUSPEND = 1 << 4;
        const OPERATOR = 1 << 5;
        const INFIX = 1 << 6;
        const TAILREC = 1 << 7;
        const VAR = 1 << 8;
        const CONST = 1 << 9;
        const LATEINIT = 1 << 10;
        const DELEGATED = 1 << 11;
    }
}

impl DeclFlags {
    /// Flags that describe which side of a linkage a declaration is on.
    pub const LINKAGE: Self = Self::EXPECT.union(Self::ACTUAL);
}
