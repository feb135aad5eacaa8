//! Loading Component
//!
//! Skeleton placeholders shaped like the content they stand in for.

use leptos::*;

/// Skeleton for a portfolio project card: image, copy, tag chips.
#[component]
pub fn ProjectCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden animate-pulse">
            <div class="h-44 bg-gray-700" />
            <div class="p-6 space-y-3">
                <div class="h-5 bg-gray-700 rounded w-1/2" />
                <div class="h-4 bg-gray-700 rounded w-5/6" />
                <div class="flex gap-2 pt-1">
                    <div class="h-5 w-14 bg-gray-700 rounded" />
                    <div class="h-5 w-10 bg-gray-700 rounded" />
                    <div class="h-5 w-16 bg-gray-700 rounded" />
                </div>
            </div>
        </div>
    }
}

/// Skeleton for a service card: icon block, heading, summary lines.
#[component]
pub fn ServiceCardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 animate-pulse">
            <div class="w-8 h-8 bg-gray-700 rounded mb-4" />
            <div class="h-5 bg-gray-700 rounded w-2/3 mb-3" />
            <div class="h-4 bg-gray-700 rounded w-full mb-2" />
            <div class="h-4 bg-gray-700 rounded w-3/4" />
        </div>
    }
}

/// Skeleton rows for the dashboard panels: one pending row per entry,
/// a title bar over a detail bar, like the project and inbox listings.
#[component]
pub fn RowSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <ul class="space-y-2 animate-pulse">
            {(0..count).map(|_| view! {
                <li class="bg-gray-900 rounded-lg px-4 py-3">
                    <div class="h-4 bg-gray-700 rounded w-1/3 mb-2" />
                    <div class="h-3 bg-gray-700 rounded w-1/2" />
                </li>
            }).collect_view()}
        </ul>
    }
}
