//! Add-to-cart button status machine.
//!
//! `idle → (busy) → success | fail → idle`. The cart write happens at press
//! time; its outcome is held until the settle delay elapses so the button
//! shows a brief "adding" state, then the result is shown until the reset
//! delay returns the button to idle. Timers live in the component; this type
//! only decides what each step does.

#[cfg(test)]
#[path = "add_to_cart_test.rs"]
mod add_to_cart_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AddStatus {
    #[default]
    Idle,
    Success,
    Fail,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AddToCartState {
    pub status: AddStatus,
    pub busy: bool,
    outcome: Option<bool>,
}

impl AddToCartState {
    /// Claim the button for a press. `false` (and no change) while busy.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.status = AddStatus::Idle;
        self.outcome = None;
        true
    }

    /// Remember whether the cart write went through.
    pub fn record_outcome(&mut self, succeeded: bool) {
        if self.busy {
            self.outcome = Some(succeeded);
        }
    }

    /// Settle delay elapsed: show the recorded outcome. A press with no
    /// recorded outcome counts as a failure.
    pub fn settle(&mut self) -> AddStatus {
        if self.busy {
            self.status = if self.outcome.take() == Some(true) { AddStatus::Success } else { AddStatus::Fail };
        }
        self.status
    }

    /// Reset delay elapsed: back to idle and accepting presses.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match (self.status, self.busy) {
            (AddStatus::Success, _) => "Added",
            (AddStatus::Fail, _) => "Failed",
            (AddStatus::Idle, true) => "Adding…",
            (AddStatus::Idle, false) => "Add to cart",
        }
    }

    /// Modifier class for the button.
    #[must_use]
    pub fn class(&self) -> &'static str {
        match (self.status, self.busy) {
            (AddStatus::Success, _) => "add-to-cart add-to-cart--success",
            (AddStatus::Fail, _) => "add-to-cart add-to-cart--fail",
            (AddStatus::Idle, true) => "add-to-cart add-to-cart--busy",
            (AddStatus::Idle, false) => "add-to-cart",
        }
    }
}
