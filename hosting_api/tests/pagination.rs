use std::sync::{Arc, Mutex};

use hosting_api::pagination::{self, Page, PageFetcher, PageFuture};
use hosting_api::types::PaginationMeta;
use hosting_api::{Error, Filter, RequestParameters, Sort};

fn simulated_page(page: u32, total_pages: u32) -> Page<String> {
    Page::new(
        vec![format!("p{}-a", page), format!("p{}-b", page)],
        PaginationMeta {
            total: u64::from(total_pages) * 2,
            count: 2,
            per_page: 2,
            total_pages,
            current_page: Some(page),
            links: None,
        },
    )
}

fn recording_fetcher(total_pages: u32, calls: Arc<Mutex<Vec<u32>>>) -> PageFetcher<String, Error> {
    Arc::new(move |params: RequestParameters| -> PageFuture<String, Error> {
        let page = params.page().unwrap_or(1);
        calls.lock().unwrap().push(page);
        Box::pin(async move { Ok(simulated_page(page, total_pages)) })
    })
}

#[derive(Debug, PartialEq)]
struct Cancelled {
    page: u32,
}

#[tokio::test]
async fn fetch_all_walks_pages_in_order() {
    let params = RequestParameters::new()
        .with_filter(Filter::eq("status", "active"))
        .with_sort(Sort::asc("name"))
        .with_per_page(2);
    let mut requested = Vec::new();

    let items = pagination::collect_all(&params, |page_params: RequestParameters| {
        requested.push(page_params.clone());
        let page = page_params.page().unwrap();
        async move { Ok::<_, Error>(simulated_page(page, 3)) }
    })
    .await
    .unwrap();

    assert_eq!(
        items,
        vec!["p1-a", "p1-b", "p2-a", "p2-b", "p3-a", "p3-b"]
    );
    assert_eq!(
        requested.iter().map(|p| p.page()).collect::<Vec<_>>(),
        vec![Some(1), Some(2), Some(3)]
    );
    for page_params in requested.iter() {
        assert_eq!(page_params.filtering(), params.filtering());
        assert_eq!(page_params.sorting(), params.sorting());
        assert_eq!(page_params.pagination().per_page, Some(2));
    }
    // the caller's parameters are untouched
    assert_eq!(params.page(), None);
}

#[tokio::test]
async fn fetch_all_consumes_each_page_before_the_next_request() {
    let events = Mutex::new(Vec::new());

    pagination::fetch_all(
        &RequestParameters::new(),
        |page_params: RequestParameters| {
            let page = page_params.page().unwrap();
            events.lock().unwrap().push(format!("fetch {}", page));
            async move { Ok::<_, Error>(simulated_page(page, 2)) }
        },
        |items: Vec<String>| {
            events.lock().unwrap().push(format!("consume {}", items.len()));
        },
    )
    .await
    .unwrap();

    assert_eq!(
        events.into_inner().unwrap(),
        vec!["fetch 1", "consume 2", "fetch 2", "consume 2"]
    );
}

#[tokio::test]
async fn missing_pagination_metadata_means_one_request() {
    let mut calls = 0;

    let items = pagination::collect_all(&RequestParameters::new(), |_params: RequestParameters| {
        calls += 1;
        let items = (0..250).map(|i| i.to_string()).collect::<Vec<_>>();
        async move { Ok::<_, Error>(Page::new(items, PaginationMeta::default())) }
    })
    .await
    .unwrap();

    assert_eq!(calls, 1);
    assert_eq!(items.len(), 250);
}

#[tokio::test]
async fn error_on_page_two_stops_the_walk() {
    let mut requested = Vec::new();
    let mut consumed = Vec::new();

    let result = pagination::fetch_all(
        &RequestParameters::new(),
        |page_params: RequestParameters| {
            let page = page_params.page().unwrap();
            requested.push(page);
            async move {
                if page == 2 {
                    Err(Cancelled { page })
                } else {
                    Ok(simulated_page(page, 3))
                }
            }
        },
        |items: Vec<String>| consumed.extend(items),
    )
    .await;

    assert_eq!(result, Err(Cancelled { page: 2 }));
    assert_eq!(requested, vec![1, 2]);
    assert_eq!(consumed, vec!["p1-a", "p1-b"]);
}

#[tokio::test]
async fn overlapping_pages_are_not_deduplicated() {
    let items = pagination::collect_all(&RequestParameters::new(), |_params: RequestParameters| async {
        Ok::<_, Error>(Page::new(
            vec!["same".to_string()],
            PaginationMeta {
                total_pages: 2,
                ..Default::default()
            },
        ))
    })
    .await
    .unwrap();

    assert_eq!(items, vec!["same", "same"]);
}

#[tokio::test]
async fn fetch_page_does_not_prefetch() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let fetcher = recording_fetcher(3, Arc::clone(&calls));

    let page = pagination::fetch_page(fetcher, RequestParameters::new().with_page(1))
        .await
        .unwrap();

    assert_eq!(*calls.lock().unwrap(), vec![1]);
    assert_eq!(page.items(), ["p1-a", "p1-b"]);
    assert_eq!(page.current_page(), 1);
    assert_eq!(page.total_pages(), 3);
    assert_eq!(page.total_items(), 6);
    assert!(!page.is_final_page());
}

#[tokio::test]
async fn navigation_returns_new_pages() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let fetcher = recording_fetcher(3, Arc::clone(&calls));
    let params = RequestParameters::new().with_filter(Filter::eq("status", "active"));

    let first = pagination::fetch_page(fetcher, params.clone()).await.unwrap();
    assert_eq!(first.current_page(), 1);
    assert!(first.previous_page().await.unwrap().is_none());

    let second = first.next_page().await.unwrap().unwrap();
    assert_eq!(second.current_page(), 2);
    assert_eq!(second.items(), ["p2-a", "p2-b"]);
    assert_eq!(second.parameters().filtering(), params.filtering());

    let last = second.last_page().await.unwrap();
    assert_eq!(last.current_page(), 3);
    assert!(last.is_final_page());
    assert!(last.next_page().await.unwrap().is_none());

    let back = last.previous_page().await.unwrap().unwrap();
    assert_eq!(back.current_page(), 2);

    let again = back.first_page().await.unwrap();
    assert_eq!(again.current_page(), 1);

    // the original page is unchanged by navigation
    assert_eq!(first.current_page(), 1);
    assert_eq!(first.items(), ["p1-a", "p1-b"]);
    // unset page, then 2, 3, 2, 1; boundary checks issue no request
    assert_eq!(*calls.lock().unwrap(), vec![1, 2, 3, 2, 1]);
}

#[tokio::test]
async fn sibling_navigation_is_independent() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let fetcher = recording_fetcher(2, Arc::clone(&calls));

    let first = pagination::fetch_page(fetcher, RequestParameters::new().with_page(1))
        .await
        .unwrap();
    let (a, b) = tokio::join!(first.next_page(), first.next_page());

    let a = a.unwrap().unwrap();
    let b = b.unwrap().unwrap();
    assert_eq!(a.current_page(), 2);
    assert_eq!(b.current_page(), 2);
    assert_eq!(a.items(), b.items());
    assert_eq!(calls.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn fetch_page_propagates_errors_unchanged() {
    let fetcher: PageFetcher<String, Cancelled> =
        Arc::new(|params: RequestParameters| -> PageFuture<String, Cancelled> {
            let page = params.page().unwrap_or(1);
            Box::pin(async move { Err(Cancelled { page }) })
        });

    let err = pagination::fetch_page(fetcher, RequestParameters::new().with_page(4))
        .await
        .unwrap_err();
    assert_eq!(err, Cancelled { page: 4 });
}
