use contracts::domain::a002_brand::Brand;
use contracts::domain::a003_category::Category;
use contracts::domain::a004_product::{Catalog, CatalogForm, CatalogTarget, Product, ProductId};
use contracts::domain::common::{AggregateRoot, Confirmed};
use contracts::shared::modal::{FormMode, ModalController};
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;
use thaw::*;

use super::details::CatalogFormModal;
use crate::app::use_config;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Flattened product row; brand and category already resolved
#[derive(Clone, Debug, PartialEq)]
struct ProductLine {
    id: ProductId,
    name: String,
    brand: String,
    category: String,
    price: String,
    description: String,
}

/// Brand or category row with the number of products pointing at it
#[derive(Clone, Debug, PartialEq)]
struct NamedLine {
    target: CatalogTarget,
    id: i64,
    name: String,
    usage: usize,
}

fn product_lines(catalog: &Catalog, currency: &str) -> Vec<ProductLine> {
    catalog
        .rows()
        .into_iter()
        .map(|row| ProductLine {
            id: row.product.id,
            name: row.product.name.clone(),
            brand: row.brand.to_string(),
            category: row.category.to_string(),
            price: row.product.format_price(currency),
            description: row.product.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn brand_lines(catalog: &Catalog) -> Vec<NamedLine> {
    catalog
        .brands
        .iter()
        .map(|b| NamedLine {
            target: CatalogTarget::Brand(b.id),
            id: b.id.0,
            name: b.name.clone(),
            usage: catalog.products_of_brand(b.id),
        })
        .collect()
}

fn category_lines(catalog: &Catalog) -> Vec<NamedLine> {
    catalog
        .categories
        .iter()
        .map(|c| NamedLine {
            target: CatalogTarget::Category(c.id),
            id: c.id.0,
            name: c.name.clone(),
            usage: catalog.products_in_category(c.id),
        })
        .collect()
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let config = use_config();
    let catalog: RwSignal<Catalog> = RwSignal::new(seed_or_empty().catalog());
    let modal: RwSignal<ModalController<CatalogForm>> = RwSignal::new(ModalController::new());
    let confirm = StoredValue::new(config.confirm.clone());
    let currency = config.ui.currency.clone();

    let products = Memo::new(move |_| catalog.with(|c| product_lines(c, &currency)));
    let brands = Memo::new(move |_| catalog.with(brand_lines));
    let categories = Memo::new(move |_| catalog.with(category_lines));

    let open = move |form: CatalogForm| modal.update(|m| m.open(form.title(), form));

    let delete = move |target: CatalogTarget| {
        let messages = confirm.get_value();
        let message = match target {
            CatalogTarget::Product(_) => messages.delete_product,
            CatalogTarget::Brand(_) => messages.delete_brand,
            CatalogTarget::Category(_) => messages.delete_category,
        };
        let result = catalog.try_update(|c| c.remove_confirmed(target, &BrowserConfirm, &message));
        match result {
            Some(Ok(Confirmed::Declined)) => log::debug!("delete of {:?} declined", target),
            Some(Err(e)) => log::warn!("delete ignored: {}", e),
            _ => {}
        }
    };

    view! {
        <PageFrame page_id="a004_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{Product::list_name()}</h1>
                    <Badge>{move || products.with(|p| p.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open(CatalogForm::Product(FormMode::Create))
                    >
                        {icon("plus")}
                        " Add Product"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Brand"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || products.get()
                                key=|line| (line.id, line.name.clone(), line.brand.clone(), line.category.clone(), line.price.clone())
                                children=move |line| {
                                    let target = CatalogTarget::Product(line.id);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;" title=line.description.clone()>
                                                        {line.name.clone()}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{line.brand.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{line.category.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{line.price.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <RowActions target=target on_edit=open on_delete=delete />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                <div class="catalog-side">
                    <NamedTable
                        title=Brand::list_name()
                        create=CatalogForm::Brand(FormMode::Create)
                        lines=brands
                        on_edit=open
                        on_delete=delete
                    />
                    <NamedTable
                        title=Category::list_name()
                        create=CatalogForm::Category(FormMode::Create)
                        lines=categories
                        on_edit=open
                        on_delete=delete
                    />
                </div>

                {move || {
                    modal.with(|m| m.active().copied().zip(m.title().map(str::to_string)))
                        .map(|(form, title)| view! {
                            <CatalogFormModal
                                title=title
                                form=form
                                catalog=catalog
                                on_close=Callback::new(move |_| modal.update(|m| m.close()))
                            />
                        })
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn RowActions<E, D>(target: CatalogTarget, on_edit: E, on_delete: D) -> impl IntoView
where
    E: Fn(CatalogForm) + Copy + Send + Sync + 'static,
    D: Fn(CatalogTarget) + Copy + Send + Sync + 'static,
{
    view! {
        <Button
            appearance=ButtonAppearance::Subtle
            on_click=move |_| on_edit(target.edit_form())
            attr:title="Edit"
        >
            {icon("edit")}
        </Button>
        <Button
            appearance=ButtonAppearance::Subtle
            on_click=move |_| on_delete(target)
            attr:title="Delete"
        >
            {icon("trash")}
        </Button>
    }
}

/// Brands and categories share one table layout
#[component]
fn NamedTable<E, D>(
    title: &'static str,
    create: CatalogForm,
    lines: Memo<Vec<NamedLine>>,
    on_edit: E,
    on_delete: D,
) -> impl IntoView
where
    E: Fn(CatalogForm) + Copy + Send + Sync + 'static,
    D: Fn(CatalogTarget) + Copy + Send + Sync + 'static,
{
    view! {
        <section class="catalog-side__block">
            <div class="catalog-side__header">
                <h3>{title}</h3>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_edit(create)>
                    {icon("plus")}
                    " Add"
                </Button>
            </div>
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Products"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || lines.get()
                        key=|line| (line.id, line.name.clone(), line.usage)
                        children=move |line| {
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>{line.id}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{line.name.clone()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{line.usage}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <RowActions target=line.target on_edit=on_edit on_delete=on_delete />
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </section>
    }
}
