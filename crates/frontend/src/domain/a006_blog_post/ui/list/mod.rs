use contracts::shared::indicators::ValueFormat;
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn BlogPostsListPage() -> impl IntoView {
    let posts = seed_or_empty().blog_store();
    let categories = posts.categories().join(", ");
    let views = ValueFormat::Integer.format(posts.total_views() as f64);
    let comments = ValueFormat::Integer.format(posts.total_comments() as f64);
    let rows = posts.most_read(posts.len()).into_iter().cloned().collect::<Vec<_>>();

    view! {
        <PageFrame page_id="a006_blog_post--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Blogs"</h1>
                    <Badge>{posts.len().to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__summary">
                        {format!("{} views, {} comments", views, comments)}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <div class="page__hint">"Categories: " {categories}</div>
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Author"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Published"</TableHeaderCell>
                                <TableHeaderCell>"Views"</TableHeaderCell>
                                <TableHeaderCell>"Comments"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows
                                .into_iter()
                                .map(|post| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-weight: 500;">{post.title}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{post.author}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{post.category}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{format_date(post.published_on)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{ValueFormat::Integer.format(post.views as f64)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{post.comments}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                })
                                .collect_view()}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
