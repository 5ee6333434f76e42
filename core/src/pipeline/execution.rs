// order_intake/src/pipeline/execution.rs

//! Contains `OrderIntake::create_order`, which runs the intake steps in the
//! order dictated by the configured `FailurePolicy`.

use tracing::{event, instrument, span, Instrument, Level, Span};

use crate::core::context::{IntakeContext, IntakeOutcome};
use crate::core::event::OrderCreatedEvent;
use crate::core::order::{OrderId, OrderRequest};
use crate::core::step::{FailurePolicy, IntakeStep};
use crate::error::{IntakeError, IntakeResult};
use crate::pipeline::definition::OrderIntake;

impl OrderIntake {
  /// Creates one order from a validated request.
  ///
  /// Under `FailurePolicy::FailRequest` a store failure is returned as
  /// `IntakeError::Persistence` and no event is dispatched. Under
  /// `FailurePolicy::DispatchThenPersist` the event goes out first and a
  /// store failure is logged, leaving `IntakeOutcome::persisted` empty.
  #[instrument(
    name = "OrderIntake::create_order",
    skip_all,
    fields(
      amount = %request.amount,
      policy = %self.policy,
      order_id = tracing::field::Empty,
    ),
    err(Display)
  )]
  pub async fn create_order(&self, request: OrderRequest) -> IntakeResult<IntakeOutcome> {
    event!(Level::INFO, "Creating an order.");
    let mut ctx = IntakeContext::new(request);

    for (step_idx, step) in self.policy.steps().into_iter().enumerate() {
      let step_span = span!(Level::INFO, "intake_step", step_name = step.name(), step_index = step_idx);
      self.run_hooked_step(step, step_span, &mut ctx).await?;
    }

    let outcome = ctx.into_outcome()?;
    event!(
      Level::INFO,
      persisted = outcome.is_persisted(),
      dispatched = outcome.dispatched,
      "Order intake completed."
    );
    Ok(outcome)
  }

  /// Hooks run in the `create_order` span, so they can record on it; the
  /// step itself runs in `step_span`.
  async fn run_hooked_step(&self, step: IntakeStep, step_span: Span, ctx: &mut IntakeContext) -> IntakeResult<()> {
    for hook in &self.hooks {
      hook.before_step(step, ctx).await;
    }

    let result = self.run_step(step, ctx).instrument(step_span.clone()).await;
    step_span.in_scope(|| match &result {
      Ok(()) => event!(Level::DEBUG, "Step finished."),
      Err(e) => event!(Level::ERROR, error = %e, "Step failed."),
    });

    for hook in &self.hooks {
      hook.after_step(step, ctx, result.is_ok()).await;
    }
    result
  }

  async fn run_step(&self, step: IntakeStep, ctx: &mut IntakeContext) -> IntakeResult<()> {
    match step {
      IntakeStep::GenerateOrderId => {
        ctx.order_id = Some(OrderId::generate());
        Ok(())
      }
      IntakeStep::ResolveCustomer => {
        let customer_id = self.customers.resolve(&ctx.request).await?;
        event!(Level::DEBUG, %customer_id, "Customer resolved.");
        ctx.customer_id = Some(customer_id);
        Ok(())
      }
      IntakeStep::PersistOrder => {
        let new_order = ctx.new_order()?;
        let order_id = new_order.id;
        match self.store.insert(new_order).await {
          Ok(order) => {
            event!(Level::INFO, created_at = %order.created_at, "Order persisted.");
            ctx.persisted = Some(order);
            Ok(())
          }
          Err(source) => match self.policy {
            FailurePolicy::FailRequest => Err(IntakeError::Persistence { order_id, source }),
            FailurePolicy::DispatchThenPersist => {
              event!(
                Level::WARN,
                %order_id,
                error = %source,
                "Order write failed after dispatch; continuing without a persisted record."
              );
              Ok(())
            }
          },
        }
      }
      IntakeStep::DispatchOrderCreated => {
        let created = OrderCreatedEvent::from(&ctx.new_order()?);
        self.dispatcher.dispatch(created).await;
        ctx.dispatched = true;
        event!(Level::DEBUG, "Order created event handed to dispatcher.");
        Ok(())
      }
    }
  }
}
