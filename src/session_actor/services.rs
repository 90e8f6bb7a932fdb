use crate::clients::{CouponClient, MemberClient, MenuClient, OrderClient};
use crate::model::{PaymentMethod, PaymentMethodInfo};

/// Loyalty rules applied at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutPolicy {
    /// Share of the amount actually paid credited back as points, in percent.
    pub points_accrual_percent: u64,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            points_accrual_percent: 1,
        }
    }
}

impl CheckoutPolicy {
    pub fn points_for(&self, amount_due: u64) -> u64 {
        amount_due.saturating_mul(self.points_accrual_percent) / 100
    }
}

/// Context injected into the Session actor: the collaborators a register talks to.
#[derive(Clone)]
pub struct SessionServices {
    pub menu: MenuClient,
    pub members: MemberClient,
    pub coupons: CouponClient,
    pub orders: OrderClient,
    pub payment_methods: Vec<PaymentMethodInfo>,
    pub policy: CheckoutPolicy,
}

impl SessionServices {
    pub fn accepts(&self, method: &PaymentMethod) -> bool {
        self.payment_methods.iter().any(|info| &info.id == method)
    }
}
