//! The endpoint table: which entries each route selects and how they are
//! projected.

use entries::{
    Criteria, Entry, EntryStatus, Locale, Order, PreviewRequest, Section, visible_statuses,
};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use transform::{
    TransformContext, case_study_summary, funding_programme_detail, funding_programme_list_item,
    news_summary, profile_summary, route_summary, transform_homepage, transform_listing,
    transform_people, transform_programme, transform_research_document, transform_survey,
    transform_update,
};

use crate::envelope::{Collection, Item, Meta, Pagination};
use crate::{ApiError, ApiResult};

/// Page size of list endpoints that don't set their own.
pub const DEFAULT_PER_PAGE: usize = 100;

/// Route patterns served, in registration order.
pub const ROUTES: &[&str] = &[
    "api/v1/list-routes",
    "api/v1/{locale}/homepage",
    "api/v1/{locale}/promoted-news",
    "api/v1/{locale}/funding-programmes",
    "api/v1/{locale}/funding-programme/{slug}",
    "api/v1/{locale}/listing",
    "api/v1/{locale}/case-studies",
    "api/v1/{locale}/profiles/{section}",
    "api/v1/{locale}/surveys",
    "api/v2/{locale}/funding-programmes",
    "api/v2/{locale}/funding-programmes/{slug}",
    "api/v2/{locale}/our-people",
    "api/v2/{locale}/research",
    "api/v2/{locale}/research/{slug}",
    "api/v2/{locale}/updates/{type}",
    "api/v2/{locale}/updates/{type}/{slug}",
];

/// A resolved route with its path and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    ListRoutes,
    Homepage { locale: Locale },
    PromotedNews { locale: Locale },
    FundingProgrammes { locale: Locale },
    FundingProgramme { locale: Locale, slug: String },
    /// Page at `path`, or every top-level page without one.
    Listing { locale: Locale, path: Option<String> },
    CaseStudies { locale: Locale },
    Profiles { locale: Locale, section: String },
    /// `all` includes closed surveys.
    Surveys { locale: Locale, all: bool },
    Programmes { locale: Locale },
    Programme { locale: Locale, slug: String },
    OurPeople { locale: Locale },
    Research { locale: Locale },
    ResearchDocument { locale: Locale, slug: String },
    /// `update_type` is the URL form of the entry type, e.g. `press-releases`.
    Updates { locale: Locale, update_type: String },
    Update { locale: Locale, update_type: String, slug: String },
}

/// What an endpoint asks of the store.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    pub criteria: Criteria,
    /// `None` for single-result endpoints.
    pub per_page: Option<usize>,
    pub one: bool,
}

impl EndpointSpec {
    fn list(criteria: Criteria, per_page: usize) -> Self {
        Self {
            criteria,
            per_page: Some(per_page),
            one: false,
        }
    }

    fn one(criteria: Criteria) -> Self {
        Self {
            criteria,
            per_page: None,
            one: true,
        }
    }
}

/// Entry type handle for the URL form of an update type.
fn update_type_handle(update_type: &str) -> String {
    update_type.replace('-', "_")
}

fn profile_section(section: &str) -> ApiResult<Section> {
    match Section::from_handle(section) {
        Some(section @ (Section::SeniorManagementTeam | Section::BoardMembers)) => Ok(section),
        _ => Err(ApiError::NotFound("Invalid section".to_string())),
    }
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListRoutes => "list_routes",
            Endpoint::Homepage { .. } => "homepage",
            Endpoint::PromotedNews { .. } => "promoted_news",
            Endpoint::FundingProgrammes { .. } => "funding_programmes",
            Endpoint::FundingProgramme { .. } => "funding_programme",
            Endpoint::Listing { .. } => "listing",
            Endpoint::CaseStudies { .. } => "case_studies",
            Endpoint::Profiles { .. } => "profiles",
            Endpoint::Surveys { .. } => "surveys",
            Endpoint::Programmes { .. } => "programmes_v2",
            Endpoint::Programme { .. } => "programme_v2",
            Endpoint::OurPeople { .. } => "our_people",
            Endpoint::Research { .. } => "research",
            Endpoint::ResearchDocument { .. } => "research_document",
            Endpoint::Updates { .. } => "updates",
            Endpoint::Update { .. } => "update",
        }
    }

    /// Request locale. The route list is not localised and uses the default.
    pub fn locale(&self) -> Locale {
        match self {
            Endpoint::ListRoutes => Locale::default(),
            Endpoint::Homepage { locale }
            | Endpoint::PromotedNews { locale }
            | Endpoint::FundingProgrammes { locale }
            | Endpoint::FundingProgramme { locale, .. }
            | Endpoint::Listing { locale, .. }
            | Endpoint::CaseStudies { locale }
            | Endpoint::Profiles { locale, .. }
            | Endpoint::Surveys { locale, .. }
            | Endpoint::Programmes { locale }
            | Endpoint::Programme { locale, .. }
            | Endpoint::OurPeople { locale }
            | Endpoint::Research { locale }
            | Endpoint::ResearchDocument { locale, .. }
            | Endpoint::Updates { locale, .. }
            | Endpoint::Update { locale, .. } => *locale,
        }
    }

    /// Store criteria, page size and cardinality for this endpoint.
    pub fn spec(&self, preview: &PreviewRequest) -> ApiResult<EndpointSpec> {
        let live_or_expired = [EntryStatus::Live, EntryStatus::Expired];

        let spec = match self {
            Endpoint::ListRoutes => EndpointSpec::list(
                Criteria::new()
                    .sections([
                        Section::About,
                        Section::FundingProgrammes,
                        Section::FundingGuidance,
                        Section::BuildingBetterOpportunities,
                    ])
                    .statuses([EntryStatus::Live, EntryStatus::Pending, EntryStatus::Expired])
                    .order(Order::Uri),
                1000,
            ),
            Endpoint::Homepage { locale } => {
                EndpointSpec::one(Criteria::new().section(Section::Homepage).site(*locale))
            }
            Endpoint::PromotedNews { locale } => EndpointSpec::list(
                Criteria::new()
                    .section(Section::News)
                    .site(*locale)
                    .promoted(true),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::FundingProgrammes { locale } => EndpointSpec::list(
                Criteria::new()
                    .section(Section::FundingProgrammes)
                    .site(*locale),
                DEFAULT_PER_PAGE,
            ),
            // Expired programmes keep their detail page.
            Endpoint::FundingProgramme { locale, slug } => EndpointSpec::one(
                Criteria::new()
                    .section(Section::FundingProgrammes)
                    .site(*locale)
                    .slug(slug.as_str())
                    .statuses(live_or_expired),
            ),
            Endpoint::Listing { locale, path } => {
                let criteria = Criteria::new().site(*locale);
                let criteria = match path.as_deref().map(|p| p.trim_matches('/')) {
                    Some(path) if !path.is_empty() => criteria.uri(path),
                    _ => criteria.level(1),
                };
                EndpointSpec::list(criteria, DEFAULT_PER_PAGE)
            }
            Endpoint::CaseStudies { locale } => EndpointSpec::list(
                Criteria::new().section(Section::CaseStudies).site(*locale),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::Profiles { locale, section } => EndpointSpec::list(
                Criteria::new()
                    .section(profile_section(section)?)
                    .site(*locale),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::Surveys { locale, all } => {
                let criteria = Criteria::new().section(Section::Surveys).site(*locale);
                let criteria = if *all { criteria.any_status() } else { criteria };
                EndpointSpec::list(criteria, DEFAULT_PER_PAGE)
            }
            Endpoint::Programmes { locale } => EndpointSpec::list(
                Criteria::new()
                    .section(Section::FundingProgrammes)
                    .site(*locale)
                    .statuses(live_or_expired),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::Programme { locale, slug } => EndpointSpec::one(
                Criteria::new()
                    .section(Section::FundingProgrammes)
                    .site(*locale)
                    .slug(slug.as_str())
                    .statuses(visible_statuses(preview)),
            ),
            Endpoint::OurPeople { locale } => EndpointSpec::list(
                Criteria::new()
                    .section(Section::People)
                    .site(*locale)
                    .statuses(visible_statuses(preview)),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::Research { locale } => EndpointSpec::list(
                Criteria::new().section(Section::Research).site(*locale),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::ResearchDocument { locale, slug } => EndpointSpec::one(
                Criteria::new()
                    .section(Section::Research)
                    .site(*locale)
                    .slug(slug.as_str())
                    .statuses(visible_statuses(preview)),
            ),
            Endpoint::Updates {
                locale,
                update_type,
            } => EndpointSpec::list(
                Criteria::new()
                    .section(Section::Updates)
                    .site(*locale)
                    .type_handle(update_type_handle(update_type))
                    .order(Order::PostDateDesc),
                DEFAULT_PER_PAGE,
            ),
            Endpoint::Update {
                locale,
                update_type,
                slug,
            } => EndpointSpec::one(
                Criteria::new()
                    .section(Section::Updates)
                    .site(*locale)
                    .type_handle(update_type_handle(update_type))
                    .slug(slug.as_str())
                    .statuses(visible_statuses(preview)),
            ),
        };
        Ok(spec)
    }

    /// Query, paginate and project. `page` is 1-based.
    pub fn run(&self, ctx: &TransformContext<'_>, page: usize) -> ApiResult<Value> {
        let spec = self.spec(ctx.preview)?;
        let found = ctx.store.query(&spec.criteria)?;

        if spec.one {
            let entry = found
                .into_iter()
                .next()
                .ok_or_else(|| ApiError::NotFound(format!("no entry for {}", self.name())))?;
            info!(
                endpoint = self.name(),
                entry_id = entry.id,
                locale = %ctx.locale,
                "endpoint_rendered"
            );
            return self.render_one(ctx, entry);
        }

        let pagination = Pagination::new(
            found.len(),
            spec.per_page.unwrap_or(DEFAULT_PER_PAGE),
            page,
        );
        let window: Vec<Entry> = found
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.count)
            .collect();

        info!(
            endpoint = self.name(),
            locale = %ctx.locale,
            total = pagination.total,
            count = pagination.count,
            page = pagination.current_page,
            "endpoint_rendered"
        );
        self.render_many(ctx, window, pagination)
    }

    fn render_one(&self, ctx: &TransformContext<'_>, entry: Entry) -> ApiResult<Value> {
        match self {
            Endpoint::Homepage { .. } => item(transform_homepage(ctx, &entry)?),
            Endpoint::FundingProgramme { .. } => item(funding_programme_detail(ctx, entry)?),
            Endpoint::Programme { .. } => item(transform_programme(ctx, entry, true)?),
            Endpoint::ResearchDocument { .. } => item(transform_research_document(ctx, entry)?),
            Endpoint::Update { .. } => item(transform_update(ctx, entry)?),
            _ => self.render_many(ctx, vec![entry], Pagination::new(1, 1, 1)),
        }
    }

    fn render_many(
        &self,
        ctx: &TransformContext<'_>,
        entries: Vec<Entry>,
        pagination: Pagination,
    ) -> ApiResult<Value> {
        match self {
            Endpoint::ListRoutes => collection(entries, pagination, |e| Ok(route_summary(&e))),
            Endpoint::PromotedNews { .. } => {
                collection(entries, pagination, |e| Ok(news_summary(&e)))
            }
            Endpoint::FundingProgrammes { .. } => collection(entries, pagination, |e| {
                Ok(funding_programme_list_item(ctx, &e))
            }),
            Endpoint::Listing { .. } => {
                collection(entries, pagination, |e| Ok(transform_listing(ctx, e)?))
            }
            Endpoint::CaseStudies { .. } => {
                collection(entries, pagination, |e| Ok(case_study_summary(ctx, &e)))
            }
            Endpoint::Profiles { .. } => {
                collection(entries, pagination, |e| Ok(profile_summary(&e)))
            }
            Endpoint::Surveys { .. } => {
                collection(entries, pagination, |e| Ok(transform_survey(&e)))
            }
            Endpoint::Programmes { .. } => collection(entries, pagination, |e| {
                Ok(transform_programme(ctx, e, false)?)
            }),
            Endpoint::OurPeople { .. } => {
                collection(entries, pagination, |e| Ok(transform_people(ctx, e)?))
            }
            Endpoint::Research { .. } => collection(entries, pagination, |e| {
                Ok(transform_research_document(ctx, e)?)
            }),
            Endpoint::Updates { .. } => {
                collection(entries, pagination, |e| Ok(transform_update(ctx, e)?))
            }
            Endpoint::Homepage { .. }
            | Endpoint::FundingProgramme { .. }
            | Endpoint::Programme { .. }
            | Endpoint::ResearchDocument { .. }
            | Endpoint::Update { .. } => match entries.into_iter().next() {
                Some(entry) => self.render_one(ctx, entry),
                None => Err(ApiError::NotFound(format!("no entry for {}", self.name()))),
            },
        }
    }
}

fn item<T: Serialize>(data: T) -> ApiResult<Value> {
    Ok(serde_json::to_value(Item { data })?)
}

fn collection<T, F>(entries: Vec<Entry>, pagination: Pagination, project: F) -> ApiResult<Value>
where
    T: Serialize,
    F: FnMut(Entry) -> ApiResult<T>,
{
    let data = entries.into_iter().map(project).collect::<ApiResult<Vec<T>>>()?;
    Ok(serde_json::to_value(Collection {
        data,
        meta: Meta { pagination },
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_pattern_is_listed_once() {
        let mut routes = ROUTES.to_vec();
        routes.sort_unstable();
        routes.dedup();
        assert_eq!(routes.len(), ROUTES.len());
        assert_eq!(ROUTES.len(), 16);
    }

    #[test]
    fn listing_without_path_selects_top_level() {
        let endpoint = Endpoint::Listing {
            locale: Locale::Cy,
            path: None,
        };
        let spec = endpoint.spec(&PreviewRequest::none()).unwrap();
        assert_eq!(spec.criteria.level, Some(1));
        assert_eq!(spec.criteria.uri, None);
        assert_eq!(spec.criteria.site, Some(Locale::Cy));
        assert_eq!(spec.per_page, Some(DEFAULT_PER_PAGE));
    }

    #[test]
    fn listing_path_is_trimmed() {
        let endpoint = Endpoint::Listing {
            locale: Locale::En,
            path: Some("/about/contact-us/".into()),
        };
        let spec = endpoint.spec(&PreviewRequest::none()).unwrap();
        assert_eq!(spec.criteria.uri.as_deref(), Some("about/contact-us"));
        assert_eq!(spec.criteria.level, None);
    }

    #[test]
    fn previews_widen_detail_statuses() {
        let endpoint = Endpoint::Programme {
            locale: Locale::En,
            slug: "awards-for-all".into(),
        };
        let plain = endpoint.spec(&PreviewRequest::none()).unwrap();
        let preview = endpoint.spec(&PreviewRequest::draft("12")).unwrap();

        assert!(plain.one);
        assert!(!plain.criteria.status.admits(EntryStatus::Disabled));
        assert!(preview.criteria.status.admits(EntryStatus::Disabled));
    }

    #[test]
    fn profiles_reject_other_sections() {
        let endpoint = Endpoint::Profiles {
            locale: Locale::En,
            section: "news".into(),
        };
        let err = endpoint.spec(&PreviewRequest::none()).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));

        let board = Endpoint::Profiles {
            locale: Locale::En,
            section: "boardMembers".into(),
        };
        let spec = board.spec(&PreviewRequest::none()).unwrap();
        assert_eq!(spec.criteria.sections, vec![Section::BoardMembers]);
    }

    #[test]
    fn update_types_map_to_entry_handles() {
        let endpoint = Endpoint::Updates {
            locale: Locale::En,
            update_type: "press-releases".into(),
        };
        let spec = endpoint.spec(&PreviewRequest::none()).unwrap();
        assert_eq!(spec.criteria.type_handle.as_deref(), Some("press_releases"));
        assert_eq!(spec.criteria.order, Order::PostDateDesc);
    }

    #[test]
    fn surveys_all_lifts_status_filter() {
        let endpoint = Endpoint::Surveys {
            locale: Locale::En,
            all: true,
        };
        let spec = endpoint.spec(&PreviewRequest::none()).unwrap();
        assert!(spec.criteria.status.admits(EntryStatus::Expired));
        assert!(spec.criteria.status.admits(EntryStatus::Disabled));
    }
}
