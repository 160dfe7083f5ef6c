/// Generation counter for trailing-edge debouncing.
///
/// Every trigger hands out a ticket; a delayed callback holding a ticket only
/// does its work if no newer trigger happened in the meantime.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }
}
