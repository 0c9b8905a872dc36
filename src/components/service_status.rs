//! Compact service-health widget.
//!
//! Probes each platform service's health endpoint on a fixed interval and
//! shows an up/down dot plus response time. Probing stops when the widget
//! is torn down.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::api;
#[cfg(feature = "hydrate")]
use crate::util::time;

/// Seconds between health sweeps.
const REFRESH_INTERVAL_SECS: u64 = 30;

/// Services probed, in display order.
const SERVICES: &[(&str, &str)] = &[
    ("Gateway", "/health"),
    ("Auth", "/auth/health"),
    ("Dashboard", "/dashboard/health"),
    ("Exam", "/exam/health"),
    ("Marketplace", "/market/health"),
];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum ProbeStatus {
    Checking,
    Up { response_ms: u64 },
    Down,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ServiceHealth {
    name: &'static str,
    status: ProbeStatus,
}

fn initial_health() -> Vec<ServiceHealth> {
    SERVICES
        .iter()
        .map(|(name, _)| ServiceHealth { name, status: ProbeStatus::Checking })
        .collect()
}

/// Inline strip of health dots, one per service.
#[component]
pub fn ServiceStatus() -> impl IntoView {
    let services = RwSignal::new(initial_health());

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::SeqCst)
    });
    spawn_probe_loop(services, alive);

    view! {
        <div class="service-status">
            <For
                each=move || services.get()
                key=|service| (service.name, service.status.clone())
                children=|service: ServiceHealth| {
                    let dot = match service.status {
                        ProbeStatus::Checking => "service-status__dot service-status__dot--checking",
                        ProbeStatus::Up { .. } => "service-status__dot service-status__dot--up",
                        ProbeStatus::Down => "service-status__dot service-status__dot--down",
                    };
                    let latency = match service.status {
                        ProbeStatus::Up { response_ms } => Some(format!("{response_ms}ms")),
                        _ => None,
                    };
                    view! {
                        <span class="service-status__item" title=service.name>
                            <span class=dot></span>
                            <span class="service-status__name">{service.name}</span>
                            {latency.map(|l| view! { <span class="service-status__latency">{l}</span> })}
                        </span>
                    }
                }
            />
        </div>
    }
}

fn spawn_probe_loop(services: RwSignal<Vec<ServiceHealth>>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                for (index, (_, path)) in SERVICES.iter().enumerate() {
                    if !alive.load(Ordering::SeqCst) {
                        return;
                    }
                    let started = time::now_ms();
                    let status = match api::probe_health(path).await {
                        Ok(()) => ProbeStatus::Up {
                            response_ms: time::now_ms().saturating_sub(started),
                        },
                        Err(_) => ProbeStatus::Down,
                    };
                    let _ = services.try_update(|list| {
                        if let Some(entry) = list.get_mut(index) {
                            entry.status = status;
                        }
                    });
                }

                gloo_timers::future::sleep(std::time::Duration::from_secs(
                    REFRESH_INTERVAL_SECS,
                ))
                .await;
                if !alive.load(Ordering::SeqCst) {
                    return;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (services, alive);
    }
}
