pub mod articles;
pub mod auth;
pub mod feed;
pub mod views;

pub use articles::{ArticleCardDto, ArticleDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, ProfileDto, TokenSubject};
pub use feed::ArticleSnapshot;
pub use views::{
    AdminViewDto, AffiliateCtaDto, ArticleViewDto, BreadcrumbItemDto, CatalogueViewDto,
    MetaTagDto, PageMetaDto, PageViewDto, ViewContent, ViewDto,
};
