use tonada_catalog::MemoryCatalog;
use tonada_core::services::CatalogService;

fn main() {
  env_logger::init();

  let mut service = CatalogService::new(MemoryCatalog::new());

  service.create_user("Ana", "111").expect("failed to create user");
  service.create_user("Bruno", "222").expect("failed to create user");

  service.create_artist("Mercedes Sosa").expect("failed to create artist");
  service.create_album("Cantora", "Mercedes Sosa").expect("failed to create album");
  service.create_song("Zona de Promesas", "Cantora", 215).expect("failed to create song");
  service.create_song("Deja la Vida Volar", "Cantora", 262).expect("failed to create song");

  let playlist =
    service.create_playlist_by_length("111", "Tardes", 215).expect("failed to create playlist");
  println!("Created playlist: {}", playlist.title);

  service.follow_playlist("222", "Tardes").expect("failed to follow playlist");

  service.like_song("111", "Zona de Promesas").expect("failed to like song");
  service.like_song("222", "Zona de Promesas").expect("failed to like song");
  service.like_song("222", "Deja la Vida Volar").expect("failed to like song");

  println!("Most popular artist: {}", service.most_popular_artist().expect("query failed"));
  println!("Most popular song: {}", service.most_popular_song().expect("query failed"));

  for song in service.list_songs().expect("query failed") {
    println!("  {} ({}s) -> {} likes", song.title, song.duration_secs, song.likes);
  }
}
