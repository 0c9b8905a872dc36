//! Shimmer placeholders shown while lists load.

use leptos::prelude::*;

/// Skeleton shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkeletonKind {
    #[default]
    Card,
    Row,
}

/// A run of shimmering placeholders.
#[component]
pub fn LoadingSkeleton(
    #[prop(optional)] kind: SkeletonKind,
    #[prop(default = 4)] count: usize,
) -> impl IntoView {
    view! {
        <div class="skeleton-grid">
            {(0..count)
                .map(|_| match kind {
                    SkeletonKind::Card => view! {
                        <div class="skeleton skeleton--card">
                            <div class="skeleton__icon"></div>
                            <div class="skeleton__line skeleton__line--wide"></div>
                            <div class="skeleton__line skeleton__line--narrow"></div>
                        </div>
                    }
                    .into_any(),
                    SkeletonKind::Row => view! {
                        <div class="skeleton skeleton--row">
                            <div class="skeleton__line skeleton__line--wide"></div>
                        </div>
                    }
                    .into_any(),
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
