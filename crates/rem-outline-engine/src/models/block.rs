use super::record::BlockRecord;

/// Stable handle to a block's slot in the [`crate::BlockIndex`] arena.
///
/// Parent/child links are stored as handles rather than references so shared
/// and cyclic edges never form ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockRef(pub(crate) usize);

impl BlockRef {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single exported block together with its resolved state.
#[derive(Debug, Clone)]
pub struct Block {
    pub id: String,
    pub record: BlockRecord,
    /// Resolved heading, used for references and page names.
    pub head: String,
    /// Resolved render text for the block's own outline line.
    pub body: String,
    /// Children in authoring order. `None` marks an id that is not indexed.
    pub children: Vec<Option<BlockRef>>,
    pub parent: Option<BlockRef>,
}

impl Block {
    pub fn new(id: String, record: BlockRecord) -> Self {
        Self {
            id,
            record,
            head: String::new(),
            body: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn is_document(&self) -> bool {
        self.record.is_document
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// A document nested under another block gets its own page.
    pub fn starts_page(&self) -> bool {
        self.is_document() && !self.is_root()
    }
}
