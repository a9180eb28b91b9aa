/// Reference to another block, rendered as that block's head label.
pub struct Reference;

impl Reference {
    pub const TAG: &'static str = "q";
    pub const ID_FIELD: &'static str = "_id";
    /// Target id is not in the index (filtered out or never exported).
    pub const BROKEN: &'static str = " **BROKEN REFERENCE** ";
    /// Target exists but has no plain-text head.
    pub const EMPTY: &'static str = "__EMPTY REFERENCE__";
}
