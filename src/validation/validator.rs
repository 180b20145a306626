//! Input validation service.

use std::collections::HashSet;

use tracing::debug;

use super::{Range, ValidationError, ValidationRules};
use crate::models::{Coordinate, Customer, DeliveryInput, Order, Restaurant};

/// Checks a [`DeliveryInput`] against a set of [`ValidationRules`].
///
/// Constructed by the caller and passed where needed; the planner never
/// validates implicitly.
///
/// # Examples
///
/// ```
/// use u_delivery::models::{Coordinate, DeliveryConfig, DeliveryInput, Driver};
/// use u_delivery::validation::Validator;
///
/// let input = DeliveryInput {
///     config: DeliveryConfig::new("greedy"),
///     driver: Driver::new(Coordinate::new(0.0, 0.0), 300.0),
///     restaurants: vec![],
///     customers: vec![],
///     orders: vec![],
/// };
/// assert!(Validator::default().validate(&input).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    rules: ValidationRules,
}

impl Validator {
    /// Creates a validator enforcing `rules`.
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// The rules in force.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validates the whole batch, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    pub fn validate(&self, input: &DeliveryInput) -> Result<(), ValidationError> {
        self.validate_algorithm(&input.config.algorithm)?;

        let limits = &self.rules.driver_limits;
        let driver_limits = input.config.driver_limits;
        check_range("max_distance", f64::from(driver_limits.max_distance), &limits.max_distance)?;
        check_range("max_orders", f64::from(driver_limits.max_orders), &limits.max_orders)?;

        check_range("driver avg_speed", input.driver.avg_speed, &self.rules.driver.avg_speed)?;
        self.validate_location("driver location", &input.driver.location)?;

        self.validate_restaurants(&input.restaurants)?;
        self.validate_customers(&input.customers)?;
        validate_orders(&input.orders, &input.restaurants, &input.customers)?;

        let max = driver_limits.max_orders;
        if input.orders.len() > max as usize {
            return Err(ValidationError::TooManyOrders {
                count: input.orders.len(),
                max,
            });
        }

        debug!(orders = input.orders.len(), "input validated");
        Ok(())
    }

    fn validate_algorithm(&self, algorithm: &str) -> Result<(), ValidationError> {
        let allowed = &self.rules.algorithm.allowed_values;
        if allowed.iter().any(|a| a == algorithm) {
            Ok(())
        } else {
            Err(ValidationError::AlgorithmNotAllowed {
                algorithm: algorithm.to_string(),
                allowed: allowed.clone(),
            })
        }
    }

    fn validate_location(&self, what: &str, location: &Coordinate) -> Result<(), ValidationError> {
        check_range(
            &format!("{what} latitude"),
            location.latitude,
            &self.rules.location.latitude,
        )?;
        check_range(
            &format!("{what} longitude"),
            location.longitude,
            &self.rules.location.longitude,
        )
    }

    fn validate_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(restaurants.len());
        for r in restaurants {
            if !seen.insert(r.id) {
                return Err(ValidationError::DuplicateRestaurant(r.id));
            }
            self.validate_location(&format!("restaurant {} location", r.id), &r.location)?;
            check_range(
                &format!("restaurant {} prep_time", r.id),
                r.avg_prep_minutes(),
                &self.rules.restaurant.prep_time,
            )?;
            check_range(
                &format!("restaurant {} peak_factor", r.id),
                r.preparation.peak_factor,
                &self.rules.restaurant.peak_factor,
            )?;
        }
        Ok(())
    }

    fn validate_customers(&self, customers: &[Customer]) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(customers.len());
        for c in customers {
            if !seen.insert(c.id.as_str()) {
                return Err(ValidationError::DuplicateCustomer(c.id.clone()));
            }
            self.validate_location(&format!("customer {} location", c.id), &c.location)?;
        }
        Ok(())
    }
}

fn validate_orders(
    orders: &[Order],
    restaurants: &[Restaurant],
    customers: &[Customer],
) -> Result<(), ValidationError> {
    let restaurant_ids: HashSet<u32> = restaurants.iter().map(|r| r.id).collect();
    let customer_ids: HashSet<&str> = customers.iter().map(|c| c.id.as_str()).collect();
    let mut seen = HashSet::with_capacity(orders.len());

    for o in orders {
        if !seen.insert(o.order_id) {
            return Err(ValidationError::DuplicateOrder(o.order_id));
        }
        if !restaurant_ids.contains(&o.restaurant_id) {
            return Err(ValidationError::UnknownRestaurant {
                order_id: o.order_id,
                restaurant_id: o.restaurant_id,
            });
        }
        if !customer_ids.contains(o.customer_id.as_str()) {
            return Err(ValidationError::UnknownCustomer {
                order_id: o.order_id,
                customer_id: o.customer_id.clone(),
            });
        }
    }
    Ok(())
}

fn check_range(field: &str, value: f64, range: &Range) -> Result<(), ValidationError> {
    if range.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: field.to_string(),
            value,
            min: range.min,
            max: range.max,
        })
    }
}
