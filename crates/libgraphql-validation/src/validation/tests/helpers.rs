use crate::ast;
use crate::ast::Node;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::validation::validate_with;
use crate::validation::RuleFactory;
use crate::validation::ValidationError;

pub(super) fn test_schema() -> Schema {
    SchemaBuilder::from_str(
        r#"
        type Query {
            article(id: ID!): Article
            articles: [Article!]
            hello: String
            search(filter: SearchFilter): [Article!]
        }

        type Mutation {
            publish(id: ID!): Article
        }

        type Subscription {
            articleUpdated: Article
            commentAdded: Comment
        }

        type Article {
            id: ID!
            title: String!
            body: String
            author: Author
            tags: [String!]
            status: Status
            publishedAt: DateTime
        }

        type Author {
            id: ID!
            name: String!
            articles: [Article!]
        }

        type Comment {
            id: ID!
            text: String
        }

        enum Status {
            DRAFT
            PUBLISHED
            ARCHIVED
        }

        input SearchFilter {
            term: String!
            limit: Int = 10
            status: Status
        }

        scalar DateTime

        directive @auth(role: String!) on FIELD
        "#,
    )
    .unwrap()
    .build()
    .unwrap()
}

pub(super) fn parse(document: &str) -> Node {
    ast::parse_executable(document).unwrap()
}

pub(super) fn errors_with(
    schema: &Schema,
    document: &str,
    rules: &[RuleFactory],
) -> Vec<ValidationError> {
    validate_with(schema, &parse(document), rules, None)
}

pub(super) fn messages(errors: &[ValidationError]) -> Vec<&str> {
    errors.iter().map(ValidationError::message).collect()
}
