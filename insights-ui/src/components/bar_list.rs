//! Horizontal bar list
//!
//! Used for most booked services and location trends. Widths come
//! pre-scaled from the render model.

use fixitnow_insights::dashboard::BarRow;
use leptos::*;

#[component]
pub fn BarList(
    rows: Vec<BarRow>,
    /// Tailwind background class of the filled part
    fill: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {rows
                .into_iter()
                .map(|row| {
                    let inline_count = row.show_inline_count().then(|| view! {
                        <span class="text-white text-sm font-semibold">{row.count}</span>
                    });

                    view! {
                        <div class="flex items-center gap-4">
                            <div class="w-32 text-sm font-medium text-gray-700 truncate" title=row.label.clone()>
                                {row.label.clone()}
                            </div>
                            <div class="flex-1 bg-gray-200 rounded-full h-8 relative overflow-hidden">
                                <div
                                    class=format!("{} h-full flex items-center justify-end pr-3 transition-all", fill)
                                    style=row.width_style()
                                >
                                    {inline_count}
                                </div>
                            </div>
                            <div class="w-12 text-right text-sm text-gray-600">{row.count}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
