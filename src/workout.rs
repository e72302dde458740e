//! Workout model: the fields every session shares, the three activity
//! variants, and the distance / speed / calorie formulas.
//!
//! There is no standalone "base" workout value. Every constructible workout is
//! one of the concrete variants, and each variant must supply its own
//! `spent_calories`, so a calorie formula can never be missing at runtime.
//!
//! Arithmetic is left unguarded: a zero `duration`, `height` or pool size
//! yields infinities or NaNs instead of an error.

use crate::types::{SummaryMessage, WorkoutKind};

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Readings common to every activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps taken or strokes made.
    pub action: f64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Session {
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Formulas shared by every activity. Variants override what differs.
pub trait Training {
    const KIND: WorkoutKind;
    /// Distance covered by one step or stroke, in meters.
    const LEN_STEP: f64 = 0.65;

    fn session(&self) -> &Session;

    /// Kilometers covered.
    fn distance(&self) -> f64 {
        self.session().action * Self::LEN_STEP / M_IN_KM
    }

    /// Kilometers per hour.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    fn spent_calories(&self) -> f64;

    fn summary(&self) -> SummaryMessage {
        SummaryMessage::new(
            Self::KIND.label(),
            self.session().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    const CALORIES_SPEED_FACTOR: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    const KIND: WorkoutKind = WorkoutKind::Running;

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        let minutes = s.duration * MIN_IN_H;
        let factor = Self::CALORIES_SPEED_FACTOR * self.mean_speed() - Self::CALORIES_SPEED_SHIFT;
        factor * s.weight / M_IN_KM * minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    /// Centimeters.
    pub height: f64,
}

impl SportsWalking {
    const CALORIES_SPEED_HEIGHT_FACTOR: f64 = 0.029;
    const CALORIES_WEIGHT_FACTOR: f64 = 0.035;

    pub const fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }
}

impl Training for SportsWalking {
    const KIND: WorkoutKind = WorkoutKind::SportsWalking;

    fn session(&self) -> &Session {
        &self.session
    }

    // The squared speed is floor-divided by height. Calorie values downstream
    // depend on this, keep it.
    fn spent_calories(&self) -> f64 {
        let s = &self.session;
        let minutes = s.duration * MIN_IN_H;
        let floored = floor_div(self.mean_speed().powi(2), self.height);
        let speed_term = floored * Self::CALORIES_SPEED_HEIGHT_FACTOR * s.weight;
        (Self::CALORIES_WEIGHT_FACTOR * s.weight + speed_term) * minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    pub session: Session,
    /// Meters.
    pub length_pool: f64,
    /// Laps swum.
    pub count_pool: f64,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_FACTOR: f64 = 2.0;

    pub const fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }
}

impl Training for Swimming {
    const KIND: WorkoutKind = WorkoutKind::Swimming;
    const LEN_STEP: f64 = 1.38;

    fn session(&self) -> &Session {
        &self.session
    }

    /// Derived from pool laps only; `action` plays no part.
    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        let shifted = self.mean_speed() + Self::CALORIES_SPEED_SHIFT;
        shifted * Self::CALORIES_WEIGHT_FACTOR * self.session.weight
    }
}

/// A workout of any supported activity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

macro_rules! each_variant {
    ($workout:expr, $w:ident => $body:expr) => {
        match $workout {
            Workout::Running($w) => $body,
            Workout::SportsWalking($w) => $body,
            Workout::Swimming($w) => $body,
        }
    };
}

impl Workout {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running(_) => WorkoutKind::Running,
            Self::SportsWalking(_) => WorkoutKind::SportsWalking,
            Self::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn session(&self) -> &Session {
        each_variant!(self, w => w.session())
    }

    pub fn distance(&self) -> f64 {
        each_variant!(self, w => w.distance())
    }

    pub fn mean_speed(&self) -> f64 {
        each_variant!(self, w => w.mean_speed())
    }

    pub fn spent_calories(&self) -> f64 {
        each_variant!(self, w => w.spent_calories())
    }

    pub fn summary(&self) -> SummaryMessage {
        each_variant!(self, w => w.summary())
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Self::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Self::SportsWalking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Self::Swimming(w)
    }
}

/// Floored quotient: the remainder-corrected `floor(lhs / rhs)` that integer
/// floor division on floats yields. A zero divisor produces NaN.
fn floor_div(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    let mut div = (lhs - rem) / rhs;
    if rem != 0.0 && (rhs < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(lhs / rhs);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}
