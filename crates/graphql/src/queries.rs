//! GraphQL documents sent to the Directus `/graphql` endpoint.

pub const ARTICLE_BY_SLUG: &str = r#"query ArticleBySlug($slug: String!) {
  articles(filter: { slug: { _eq: $slug } }, limit: 1) {
    id
    title
    slug
    cover {
      id
    }
    coverColor
    author {
      name
      duty
    }
    publishedAt
    readingTime
    description
    contentFlexible
    tags {
      tags_id {
        name
        slug
      }
    }
    titleForRelatedArticlesSection
    relatedArticles {
      related_articles_id {
        cover {
          id
        }
        tags {
          tags_id {
            name
            slug
          }
        }
        title
        slug
        author {
          name
          duty
        }
      }
    }
  }
}"#;

pub const ARTICLE_BLOCKS: &str = r#"query CustomBlocks($articleId: GraphQLStringOrFloat!) {
  article_blocks(filter: { articles_id: { id: { _eq: $articleId } } }, limit: -1) {
    id
    collection
    item {
      ... on block_lead {
        text
      }
      ... on block_image {
        image {
          id
          width
          height
        }
        caption
        backgroundColor
        width
        padding
        stretch
      }
      ... on block_advertising {
        title
        content
        linkText
        linkUrl
      }
      ... on block_code {
        code
      }
      ... on block_quote {
        text
        authorName
        authorDuty
        type
        width
        photo {
          id
        }
      }
    }
  }
}"#;

pub const ARTICLES_WITH_COUNT: &str = r#"query ArticlesWithCount($page: Int, $limit: Int, $sort: [String]) {
  articles(sort: $sort, limit: $limit, page: $page) {
    cover {
      id
    }
    tags {
      tags_id {
        name
        slug
      }
    }
    publishedAt
    title
    slug
    description
    author {
      name
      duty
    }
  }
  articles_aggregated {
    count {
      id
    }
  }
}"#;

pub const TAGS: &str = r#"query Tags($sort: [String]) {
  tags(sort: $sort, limit: -1) {
    name
    slug
  }
}"#;

pub const TAGS_WITH_COUNT: &str = r#"query TagsWithCount($page: Int, $limit: Int, $sort: [String]) {
  tags(sort: $sort, limit: $limit, page: $page) {
    name
    slug
  }
  tags_aggregated {
    count {
      id
    }
  }
}"#;

pub const ARTICLES_BY_TAG_WITH_COUNT: &str = r#"query ArticlesWithFilterAndCount(
  $page: Int
  $limit: Int
  $sort: [String]
  $tagSlug: String!
) {
  articles(
    sort: $sort
    limit: $limit
    page: $page
    filter: { tags: { tags_id: { slug: { _eq: $tagSlug } } } }
  ) {
    cover {
      id
    }
    title
    slug
    publishedAt
    author {
      name
      duty
    }
    tags {
      tags_id {
        name
        slug
      }
    }
  }
  articles_aggregated(
    filter: { tags: { tags_id: { slug: { _eq: $tagSlug } } } }
  ) {
    count {
      id
    }
  }
}"#;
