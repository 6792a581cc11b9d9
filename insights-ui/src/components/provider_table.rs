//! Top providers table

use fixitnow_insights::dashboard::ProviderRow;
use leptos::*;

#[component]
pub fn ProviderTable(rows: Vec<ProviderRow>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="w-full">
                <thead>
                    <tr class="border-b-2 border-gray-200">
                        <th class="text-left py-3 px-4 text-sm font-semibold text-gray-700">"Provider"</th>
                        <th class="text-left py-3 px-4 text-sm font-semibold text-gray-700">"Rating"</th>
                        <th class="text-left py-3 px-4 text-sm font-semibold text-gray-700">"Bookings"</th>
                        <th class="text-left py-3 px-4 text-sm font-semibold text-gray-700">"Earnings"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let share = row.share_style();
                            view! {
                                <tr class="border-b border-gray-100 hover:bg-gray-50">
                                    <td class="py-3 px-4 text-gray-800 font-medium">{row.name}</td>
                                    <td class="py-3 px-4">
                                        <span class="bg-yellow-100 text-yellow-800 px-3 py-1 rounded-full text-sm font-semibold">
                                            {row.rating}
                                        </span>
                                    </td>
                                    <td class="py-3 px-4 text-gray-700 font-medium">
                                        {row.bookings}
                                        // Share of the busiest provider's bookings
                                        <div class="mt-1 w-24 bg-gray-200 rounded-full h-1">
                                            <div class="bg-blue-400 h-1 rounded-full" style=share />
                                        </div>
                                    </td>
                                    <td class="py-3 px-4 text-green-600 font-bold">{row.earnings}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
