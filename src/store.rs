use crate::model::{Id, Intern, Placement};

// Id counters start here so generated ids read like server-assigned ones.
const FIRST_SEQUENCE: u64 = 1000;

/// In-memory session state for both rosters. There is exactly one writer
/// context; every mutation replaces a whole record by id, so readers always
/// observe a consistent snapshot.
#[derive(Debug, Clone)]
pub struct RosterStore {
    interns: Vec<Intern>,
    placements: Vec<Placement>,
    next_intern: u64,
    next_placement: u64,
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterStore {
    pub fn new() -> Self {
        Self {
            interns: Vec::new(),
            placements: Vec::new(),
            next_intern: FIRST_SEQUENCE,
            next_placement: FIRST_SEQUENCE,
        }
    }

    /// Mints the next intern id. Sequences are never reused in a session.
    pub fn next_intern_id(&mut self) -> Id<Intern> {
        self.next_intern += 1;
        Id::new(format!("INT-{}", self.next_intern))
    }

    pub fn next_placement_id(&mut self) -> Id<Placement> {
        self.next_placement += 1;
        Id::new(format!("PLC-{}", self.next_placement))
    }

    pub fn insert_intern(&mut self, intern: Intern) {
        self.interns.push(intern);
    }

    pub fn insert_placement(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    pub fn intern(&self, id: &Id<Intern>) -> Option<&Intern> {
        self.interns.iter().find(|i| &i.id == id)
    }

    pub fn placement(&self, id: &Id<Placement>) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.id == id)
    }

    /// Replaces the stored record whose id matches. Returns false when the
    /// id is unknown.
    pub fn replace_intern(&mut self, intern: Intern) -> bool {
        match self.interns.iter_mut().find(|i| i.id == intern.id) {
            Some(slot) => {
                *slot = intern;
                true
            }
            None => false,
        }
    }

    pub fn replace_placement(&mut self, placement: Placement) -> bool {
        match self.placements.iter_mut().find(|p| p.id == placement.id) {
            Some(slot) => {
                *slot = placement;
                true
            }
            None => false,
        }
    }

    pub fn interns(&self) -> &[Intern] {
        &self.interns
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
}
