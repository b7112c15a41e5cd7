//! Call-tracing demonstration
//!
//! Runs an order controller/service/repository chain through the tracing
//! proxy, showing:
//! 1. Nested begin/end lines sharing one trace id
//! 2. Elapsed-time measurement per call
//! 3. The exception path: error logged, then propagated unchanged
//! 4. Policy-selected tracing
#![allow(clippy::unwrap_used, clippy::expect_used)]

use calltrace_core::{init, Interceptor, Profile, TracePolicy, TraceRecorder, Traced};
use std::fmt;
use std::thread;
use std::time::Duration;

#[derive(Debug)]
struct OrderError(String);

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for OrderError {}

struct OrderRepository;

impl OrderRepository {
    fn save(&self, item_id: &str) -> Result<(), OrderError> {
        // Simulated storage latency
        thread::sleep(Duration::from_millis(100));
        if item_id == "ex" {
            return Err(OrderError("disk full".to_string()));
        }
        Ok(())
    }
}

struct OrderService {
    repository: Traced<OrderRepository>,
}

impl OrderService {
    fn order_item(&self, item_id: &str) -> Result<(), OrderError> {
        self.repository
            .call("OrderRepository.save()", |repo| repo.save(item_id))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    let recorder = TraceRecorder::default();
    let service = Traced::new(
        OrderService {
            repository: Traced::new(OrderRepository, recorder.clone()),
        },
        recorder.clone(),
    );

    println!("=== calltrace demo ===\n");

    // ===== Part 1: Success path =====
    println!("## Part 1: Nested success\n");
    service.call("OrderService.orderItem()", |svc| svc.order_item("item-1"))?;
    println!("✓ order saved\n");

    // ===== Part 2: Exception path =====
    println!("## Part 2: Failure propagates unchanged\n");
    let err = service
        .call("OrderService.orderItem()", |svc| svc.order_item("ex"))
        .unwrap_err();
    println!("✓ caller observed the original error: {}\n", err);

    // ===== Part 3: Policy-selected tracing =====
    println!("## Part 3: Only order* calls are traced\n");
    let policy = TracePolicy::with_patterns(["OrderService.*", "OrderRepository.*"]);
    let interceptor = Interceptor::with_policy(recorder, policy);

    interceptor.invoke("OrderService.orderItem()", || {
        service.inner().order_item("item-2")
    })?;
    interceptor.invoke::<_, OrderError, _>("HealthCheck.ping()", || {
        // Not selected by the policy: runs silently.
        Ok(())
    })?;
    println!("✓ selected call traced, healthcheck silent\n");

    println!("=== demo complete ===");
    Ok(())
}
