//! Dashboard page: live campus telemetry.
//!
//! Sensors and shuttle positions re-poll on a fixed interval; the loop is
//! cancelled when the page is torn down so a stale response never writes
//! into disposed state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_skeleton::LoadingSkeleton;
use crate::components::service_status::ServiceStatus;
use crate::net::types::{Sensor, Shuttle};
use crate::state::dashboard;
use crate::state::session::SessionState;
use crate::util::format;

/// Seconds between telemetry refreshes.
const POLL_INTERVAL_SECS: u64 = 6;

/// Dashboard page: live sensor cards and shuttle tracking.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = session.get();
        if !state.is_loading() && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // `None` until the first sweep lands.
    let sensors = RwSignal::new(None::<Vec<Sensor>>);
    let shuttles = RwSignal::new(Vec::<Shuttle>::new());
    let live = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::SeqCst)
    });
    spawn_telemetry_poll(sensors, shuttles, live, alive);

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Campus Dashboard"</h1>
                    <p class="dashboard-page__subtitle">
                        "Live readings from devices across campus"
                    </p>
                </div>
                <div class="dashboard-page__meta">
                    <ServiceStatus/>
                    <Show when=move || live.get()>
                        <span class="chip chip--live">"LIVE"</span>
                    </Show>
                </div>
            </header>

            <section class="card">
                <h2 class="card__title">"Sensors"</h2>
                <Show
                    when=move || sensors.get().is_some()
                    fallback=|| view! { <LoadingSkeleton count=4/> }
                >
                    <div class="dashboard-page__sensors">
                        {move || {
                            sensors
                                .get()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|sensor| view! { <SensorCard sensor=sensor/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>

            <section class="card">
                <h2 class="card__title">"Shuttle Tracking"</h2>
                <div class="dashboard-page__shuttles">
                    {move || {
                        let list = shuttles.get();
                        if list.is_empty() {
                            view! { <p class="dashboard-page__empty">"No shuttles reporting."</p> }
                                .into_any()
                        } else {
                            list.into_iter()
                                .map(|shuttle| view! { <ShuttleRow shuttle=shuttle/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}

/// One sensor reading with its comfort-band status and progress bar.
#[component]
fn SensorCard(sensor: Sensor) -> impl IntoView {
    let status = dashboard::classify(&sensor.kind, sensor.value);
    let icon = dashboard::icon_for(&sensor.kind);
    let level_class = match status.level {
        dashboard::SensorLevel::Low => "sensor-card--low",
        dashboard::SensorLevel::Normal => "sensor-card--normal",
        dashboard::SensorLevel::High => "sensor-card--high",
    };
    let bar_style = format!("width: {:.0}%", status.percentage);
    let updated = format::time_ago(&sensor.updated_at);

    view! {
        <div class=format!("sensor-card {level_class}")>
            <div class="sensor-card__header">
                <span class="sensor-card__icon">{icon}</span>
                <span class="sensor-card__label">{sensor.label}</span>
            </div>
            <div class="sensor-card__value">
                <span>{format!("{:.1}", sensor.value)}</span>
                <span class="sensor-card__unit">{sensor.unit}</span>
            </div>
            <div class="sensor-card__progress">
                <div class="sensor-card__progress-bar" style=bar_style></div>
            </div>
            <div class="sensor-card__footer">
                <span class="sensor-card__status">{status.label}</span>
                <span class="sensor-card__time">{updated}</span>
            </div>
        </div>
    }
}

#[component]
fn ShuttleRow(shuttle: Shuttle) -> impl IntoView {
    let coords = format!("{:.4}, {:.4}", shuttle.latitude, shuttle.longitude);
    let updated = format::time_ago(&shuttle.updated_at);

    view! {
        <div class="shuttle-row">
            <span class="shuttle-row__name">{shuttle.name}</span>
            <span class="shuttle-row__coords">{coords}</span>
            <span class="shuttle-row__time">{updated}</span>
        </div>
    }
}

fn spawn_telemetry_poll(
    sensors: RwSignal<Option<Vec<Sensor>>>,
    shuttles: RwSignal<Vec<Shuttle>>,
    live: RwSignal<bool>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        use crate::net::api;

        leptos::task::spawn_local(async move {
            loop {
                let (sensor_result, shuttle_result) =
                    futures::join!(api::fetch_sensors(), api::fetch_shuttles());
                if !alive.load(Ordering::SeqCst) {
                    return;
                }

                match sensor_result {
                    Ok(list) => {
                        let _ = sensors.try_update(|s| *s = Some(list));
                        let _ = live.try_update(|l| *l = true);
                    }
                    Err(err) => {
                        leptos::logging::warn!("sensor fetch failed: {err}");
                        // Leave the last good reading up; an empty list only
                        // on the very first failure.
                        let _ = sensors.try_update(|s| {
                            if s.is_none() {
                                *s = Some(Vec::new());
                            }
                        });
                    }
                }
                match shuttle_result {
                    Ok(list) => {
                        let _ = shuttles.try_update(|s| *s = list);
                    }
                    Err(err) => leptos::logging::warn!("shuttle fetch failed: {err}"),
                }

                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS))
                    .await;
                if !alive.load(Ordering::SeqCst) {
                    return;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (sensors, shuttles, live, alive);
    }
}
