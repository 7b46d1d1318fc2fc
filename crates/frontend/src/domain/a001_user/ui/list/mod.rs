mod state;

use contracts::domain::a001_user::{User, UserId, UserStatus};
use contracts::domain::common::{Confirmed, EntityStore, StoreError};
use contracts::shared::modal::{FormMode, ModalController};
use contracts::shared::seed::seed_or_empty;
use leptos::prelude::*;
use thaw::*;

use super::details::UserFormModal;
use crate::app::use_config;
use crate::shared::confirm::BrowserConfirm;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

fn report(action: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        log::warn!("{} ignored: {}", action, e);
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    let config = use_config();
    let store: RwSignal<EntityStore<User>> = RwSignal::new(seed_or_empty().user_store());
    let modal: RwSignal<ModalController<FormMode<UserId>>> = RwSignal::new(ModalController::new());
    let state = create_state();
    let search_signal = RwSignal::new(String::new());

    // Keep the filter in step with the search box
    Effect::new(move |_| {
        let query = search_signal.get();
        state.update(|s| s.search_query = query);
    });

    let visible = Memo::new(move |_| {
        let filter = state.get();
        store.with(|s| s.iter().filter(|u| filter.accepts(u)).cloned().collect::<Vec<_>>())
    });

    let delete_message = StoredValue::new(config.confirm.delete_user.clone());
    let ban_message = StoredValue::new(config.confirm.ban_user.clone());

    let delete_user = move |id: UserId| {
        let result = store.try_update(|s| {
            s.remove_confirmed(id, &BrowserConfirm, &delete_message.get_value())
                .map(|outcome| {
                    if let Confirmed::Done(user) = outcome {
                        log::info!("Deleted user {}", user.email);
                    }
                })
        });
        report("delete", result.unwrap_or(Ok(())));
    };

    let ban_user = move |id: UserId| {
        let result = store.try_update(|s| {
            s.ban(id, &BrowserConfirm, &ban_message.get_value())
                .map(|_| ())
        });
        report("ban", result.unwrap_or(Ok(())));
    };

    let activate_user = move |id: UserId| {
        let result = store.try_update(|s| s.activate(id).map(|_| ()));
        report("activate", result.unwrap_or(Ok(())));
    };

    let set_filter = move |filter: Option<UserStatus>| state.update(|s| s.status_filter = filter);

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
                    <Badge>{move || store.with(|s| s.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| modal.update(|m| m.open("Create User", FormMode::Create))
                    >
                        {icon("plus")}
                        " Add User"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <div style="flex: 1; max-width: 320px;">
                            <Input value=search_signal placeholder="Name or email..." />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_filter(None)
                        >
                            "All"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_filter(Some(UserStatus::Active))
                        >
                            "Active"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_filter(Some(UserStatus::Banned))
                        >
                            "Banned"
                        </Button>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"User"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Role"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|u| (u.id, u.name.clone(), u.email.clone(), u.role, u.status)
                                children=move |user| {
                                    let id = user.id;
                                    let is_active = user.is_active();
                                    let initial = user.initial();
                                    let name = user.name.clone();
                                    let email = user.email.clone();
                                    let is_admin = user.is_admin();
                                    let role_description = user.role.description();
                                    let role = user.role.as_str();
                                    let status = user.status.as_str();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class="avatar">{initial}</span>
                                                    <span style="font-weight: 500;">{name}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span
                                                        class="badge"
                                                        class:badge--warning=is_admin
                                                        class:badge--neutral=!is_admin
                                                        title=role_description
                                                    >
                                                        {role}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span
                                                        class="badge"
                                                        class:badge--success=is_active
                                                        class:badge--error=!is_active
                                                    >
                                                        {status}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| modal.update(|m| m.open("Update User", FormMode::Edit(id)))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                {if is_active {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| ban_user(id)
                                                            attr:title="Ban"
                                                        >
                                                            {icon("ban")}
                                                        </Button>
                                                    }.into_any()
                                                } else {
                                                    view! {
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| activate_user(id)
                                                            attr:title="Activate"
                                                        >
                                                            {icon("check")}
                                                        </Button>
                                                    }.into_any()
                                                }}
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_user(id)
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    <Show when=move || visible.with(|v| v.is_empty())>
                        <div class="table__empty">"No users match the filter"</div>
                    </Show>
                </div>

                {move || {
                    modal.with(|m| m.active().copied().zip(m.title().map(str::to_string)))
                        .map(|(mode, title)| view! {
                            <UserFormModal
                                title=title
                                mode=mode
                                store=store
                                on_close=Callback::new(move |_| modal.update(|m| m.close()))
                            />
                        })
                }}
            </div>
        </PageFrame>
    }
}
