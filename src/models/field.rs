use super::status::Status;

const NAME_CYCLE: [Status; 3] = [Status::NotClocked, Status::ClockedIn, Status::ClockedOut];
const SHIFT_CYCLE: [Status; 3] = [Status::Normal, Status::Tardy, Status::Absent];
const BREAK_CYCLE: [Status; 3] = [Status::NotStarted, Status::OnBreak, Status::Returned];

/// The six tracked columns of an employee row, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    ShiftStart,
    ShiftEnd,
    FirstBreak,
    Lunch,
    SecondBreak,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::ShiftStart,
        Field::ShiftEnd,
        Field::FirstBreak,
        Field::Lunch,
        Field::SecondBreak,
    ];

    /// Status cycle for this field. The first entry is the initial status.
    pub fn cycle(&self) -> &'static [Status] {
        match self {
            Field::Name => &NAME_CYCLE,
            Field::ShiftStart | Field::ShiftEnd => &SHIFT_CYCLE,
            Field::FirstBreak | Field::Lunch | Field::SecondBreak => &BREAK_CYCLE,
        }
    }

    pub fn initial_status(&self) -> Status {
        self.cycle()[0]
    }

    /// Next status after `current`, wrapping around.
    ///
    /// A status outside this field's cycle restarts at the first entry.
    pub fn next_status(&self, current: Status) -> Status {
        let cycle = self.cycle();
        match cycle.iter().position(|s| *s == current) {
            Some(i) => cycle[(i + 1) % cycle.len()],
            None => cycle[0],
        }
    }

    /// Key used in the persisted JSON blob.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::ShiftStart => "shiftStart",
            Field::ShiftEnd => "shiftEnd",
            Field::FirstBreak => "firstBreak",
            Field::Lunch => "lunch",
            Field::SecondBreak => "secondBreak",
        }
    }

    /// Column header shown in the terminal table.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::ShiftStart => "Shift Start",
            Field::ShiftEnd => "Shift End",
            Field::FirstBreak => "First Break",
            Field::Lunch => "Lunch",
            Field::SecondBreak => "Second Break",
        }
    }

    /// Helper: parse user input (JSON key, kebab or snake case, any casing)
    pub fn from_input(s: &str) -> Option<Self> {
        let norm: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Field::ALL
            .into_iter()
            .find(|f| f.key().to_lowercase() == norm)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
