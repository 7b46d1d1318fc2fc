use contracts::domain::a005_order::OrderStatus;
use contracts::shared::indicators::ValueFormat;
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;
use thaw::*;

use crate::app::use_config;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "badge badge--warning",
        OrderStatus::Completed => "badge badge--success",
        OrderStatus::Cancelled => "badge badge--error",
    }
}

/// Read-only order list with a status filter
#[component]
pub fn OrdersListPage() -> impl IntoView {
    let config = use_config();
    let money = ValueFormat::Money {
        currency: config.ui.currency.clone(),
    };
    let orders = StoredValue::new(seed_or_empty().order_store());
    let (filter, set_filter) = signal(Option::<OrderStatus>::None);

    let revenue = money.format(orders.with_value(|o| o.revenue()));

    let rows = move || {
        let status = filter.get();
        orders.with_value(|o| o.filtered(status).into_iter().cloned().collect::<Vec<_>>())
    };

    view! {
        <PageFrame page_id="a005_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Orders"</h1>
                    <Badge>{orders.with_value(|o| o.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__summary">"Revenue: " <strong>{revenue}</strong></span>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| set_filter.set(None)>
                            "All"
                        </Button>
                        {OrderStatus::ALL
                            .into_iter()
                            .map(|status| {
                                let count = orders.with_value(|o| o.count_by_status(status));
                                view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| set_filter.set(Some(status))
                                    >
                                        {format!("{} ({})", status.as_str(), count)}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Order"</TableHeaderCell>
                                <TableHeaderCell>"Customer"</TableHeaderCell>
                                <TableHeaderCell>"Date"</TableHeaderCell>
                                <TableHeaderCell>"Total"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=rows
                                key=|order| order.id
                                children=move |order| {
                                    let total = money.format(order.total);
                                    let number = order.number();
                                    let customer = order.customer.clone();
                                    let placed_on = format_date(order.placed_on);
                                    let status_cls = status_class(order.status);
                                    let status = order.status.as_str();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{number}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{customer}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{placed_on}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{total}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_cls>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
