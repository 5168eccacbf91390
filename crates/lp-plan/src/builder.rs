//! Fluent builder for constructing a [`Planner`].

use lp_core::{AgentRequest, PlanRng, PlannerConfig};
use lp_spatial::{CostField, Router};

use crate::{PlanError, PlanResult, Planner};

/// Fluent builder for [`Planner<R>`].
///
/// # Required inputs
///
/// - [`PlannerConfig`] — grid size, obstacles, seed, delay cap, agents, …
/// - `R: Router` — the routing algorithm (e.g. [`lp_spatial::DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                            |
/// |-------------------|----------------------------------------------------|
/// | `.field(f)`       | `CostField::from_config(&config, PlanRng::new(config.seed))` |
/// | `.requests(v)`    | `config.agents`                                    |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(config, DijkstraRouter)
///     .field(field)
///     .build()?;
/// let report = planner.run(&mut NoopObserver)?;
/// ```
pub struct PlannerBuilder<R: Router> {
    config:   PlannerConfig,
    router:   R,
    field:    Option<CostField>,
    requests: Option<Vec<AgentRequest>>,
}

impl<R: Router> PlannerBuilder<R> {
    pub fn new(config: PlannerConfig, router: R) -> Self {
        Self { config, router, field: None, requests: None }
    }

    /// Supply a pre-built cost field.  Its side must equal
    /// `config.grid_size` and it must block every cell in `config.blocked`.
    pub fn field(mut self, field: CostField) -> Self {
        self.field = Some(field);
        self
    }

    /// Override the agent requests from the config.  Order is priority.
    pub fn requests(mut self, requests: Vec<AgentRequest>) -> Self {
        self.requests = Some(requests);
        self
    }

    /// Validate inputs, build the field if none was given, and return a
    /// ready-to-run [`Planner`].
    pub fn build(self) -> PlanResult<Planner<R>> {
        self.config.validate()?;

        let field = match self.field {
            Some(f) => {
                if f.side() != self.config.grid_size {
                    return Err(PlanError::FieldSizeMismatch {
                        expected: self.config.grid_size,
                        got:      f.side(),
                    });
                }
                for &cell in &self.config.blocked {
                    if !f.is_blocked(cell)? {
                        return Err(PlanError::WallNotBlocked { cell });
                    }
                }
                f
            }
            None => {
                let mut rng = PlanRng::new(self.config.seed);
                CostField::from_config(&self.config, &mut rng)?
            }
        };

        let requests = self.requests.unwrap_or_else(|| self.config.agents.clone());

        Ok(Planner {
            config: self.config,
            field,
            router: self.router,
            requests,
        })
    }
}
