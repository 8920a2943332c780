/// The sections of a benchmark run in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// A single key is removed and inserted back per routine call
    RemoveInsert,
    /// A batch of keys is removed and inserted back per routine call
    BatchRemoveInsert,
}

/// The description of a single suite within a [`Section`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePlan {
    /// The name of the suite and of the `criterion` benchmark group
    pub name: String,
    /// The number of keys in each container
    pub size: usize,
    /// The batch length if this is a suite of the [`Section::BatchRemoveInsert`]
    pub changes: Option<usize>,
}

impl Section {
    /// All sections
    pub const ALL: [Self; 2] = [Self::RemoveInsert, Self::BatchRemoveInsert];

    /// The title printed above the section
    pub fn title(self) -> &'static str {
        match self {
            Self::RemoveInsert => "Map, remove key then add it back",
            Self::BatchRemoveInsert => "Map batch, for N random keys, remove then add it back",
        }
    }

    /// The suites of this section for all `sizes` and `changes`
    pub fn suites(self, sizes: &[usize], changes: &[usize]) -> Vec<SuitePlan> {
        match self {
            Self::RemoveInsert => sizes
                .iter()
                .map(|&size| SuitePlan {
                    name: format!("Map size: {size}"),
                    size,
                    changes: None,
                })
                .collect(),
            Self::BatchRemoveInsert => sizes
                .iter()
                .flat_map(|&size| {
                    changes.iter().map(move |&changes| SuitePlan {
                        name: format!("Map size: {size}, N: {changes}"),
                        size,
                        changes: Some(changes),
                    })
                })
                .collect(),
        }
    }
}

impl SuitePlan {
    /// The number of remove and insert cycles per routine call
    pub fn operations(&self) -> usize {
        self.changes.unwrap_or(1)
    }
}
