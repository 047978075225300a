
use queueboard::ticket::Ticket;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub const PICKUP_COUNTER: &str = "Pick-Up counter";

/// The kinds of visit a customer can queue up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Prescription,
    Pickup,
    NormalCheckout,
}

impl Category {
    pub fn prefix(self) -> char {
        match self {
            Category::Pickup => 'B',
            Category::Prescription | Category::NormalCheckout => 'A',
        }
    }

    /// Picks the counter for a new ticket: pick-ups have their own counter, everyone
    /// else is sent to counter 1 or 2 at random.
    pub fn counter<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Category::Pickup => PICKUP_COUNTER.to_string(),
            Category::Prescription | Category::NormalCheckout => {
                format!("Counter {}", rng.random_range(1..=2))
            }
        }
    }

    /// Draws a ticket for this category.
    ///
    /// Numbers are the category prefix plus a value below 100 and are not checked
    /// against the queue, so repeats are possible.
    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> Ticket {
        let counter = self.counter(rng);
        let number = format!("{}{}", self.prefix(), rng.random_range(0..100));
        Ticket::new(number, Some(counter))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Prescription => "Prescription",
            Category::Pickup => "Pickup - B Group",
            Category::NormalCheckout => "Normal Checkout",
        };
        f.write_str(label)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prescription" | "a" => Ok(Category::Prescription),
            "pickup" | "b" => Ok(Category::Pickup),
            "checkout" | "normal" => Ok(Category::NormalCheckout),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}
